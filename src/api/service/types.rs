use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(rename = "startLocation", default)]
    pub start_location: String,

    #[serde(default)]
    pub destinations: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DestinationResult {
    pub address: String,

    #[serde(rename = "driveDurationMinutes")]
    pub drive_duration_minutes: Option<f64>,

    #[serde(rename = "driveDistanceMiles")]
    pub drive_distance_miles: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_destination_serializes_explicit_nulls() {
        let result = DestinationResult {
            address: "nowhere".to_string(),
            drive_duration_minutes: None,
            drive_distance_miles: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "nowhere",
                "driveDurationMinutes": null,
                "driveDistanceMiles": null,
            })
        );
    }

    #[test]
    fn request_tolerates_missing_fields() {
        let request: CalculateRequest = serde_json::from_str("{}").unwrap();

        assert!(request.start_location.is_empty());
        assert!(request.destinations.is_empty());
    }

    #[test]
    fn request_accepts_camel_case_fields() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"startLocation":"79045","destinations":["a","b"]}"#).unwrap();

        assert_eq!(request.start_location, "79045");
        assert_eq!(request.destinations, vec!["a", "b"]);
    }
}
