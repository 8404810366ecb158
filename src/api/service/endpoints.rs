use axum::extract::{Json, State};

use crate::api::distance_matrix;
use crate::api::distance_matrix::client::STATUS_OK;
use crate::api::distance_matrix::types::MatrixResponse;

use super::ApiError;
use super::types::*;

pub type Result<T> = std::result::Result<T, ApiError>;

const METERS_PER_MILE: f64 = 1609.34;
const SECONDS_PER_MINUTE: f64 = 60.0;

pub async fn calculate(
    State(client): State<distance_matrix::Client>,
    Json(r): Json<CalculateRequest>,
) -> Result<Json<Vec<DestinationResult>>> {
    validate(&r)?;

    let response = client
        .drive_times(&r.start_location, &r.destinations)
        .await?;

    let results = map_elements(&r.destinations, &response)?;

    Ok(Json(results))
}

fn validate(r: &CalculateRequest) -> Result<()> {
    if r.start_location.is_empty()
        || r.destinations.is_empty()
        || r.destinations.iter().any(|d| d.is_empty())
    {
        return Err(ApiError::InvalidInput);
    }

    Ok(())
}

/// Maps the single origin's element row onto the submitted destinations,
/// positionally. A destination the provider could not route degrades to null
/// fields; a row that disagrees with the request in shape fails the request.
fn map_elements(
    destinations: &[String],
    response: &MatrixResponse,
) -> std::result::Result<Vec<DestinationResult>, distance_matrix::MatrixError> {
    use distance_matrix::MatrixError;

    let row = response
        .rows
        .first()
        .ok_or_else(|| MatrixError::Malformed("response has no rows".to_string()))?;

    if row.elements.len() != destinations.len() {
        return Err(MatrixError::Malformed(format!(
            "expected {} elements, got {}",
            destinations.len(),
            row.elements.len()
        )));
    }

    let mut results = Vec::with_capacity(destinations.len());

    for (address, element) in destinations.iter().zip(&row.elements) {
        let result = if element.status == STATUS_OK {
            let (duration, distance) = match (&element.duration, &element.distance) {
                (Some(duration), Some(distance)) => (duration, distance),
                _ => {
                    return Err(MatrixError::Malformed(format!(
                        "element for {address} is OK but lacks duration/distance"
                    )));
                }
            };

            DestinationResult {
                address: address.clone(),
                drive_duration_minutes: Some(duration.value / SECONDS_PER_MINUTE),
                drive_distance_miles: Some(distance.value / METERS_PER_MILE),
            }
        } else {
            DestinationResult {
                address: address.clone(),
                drive_duration_minutes: None,
                drive_distance_miles: None,
            }
        };

        results.push(result);
    }

    Ok(results)
}
