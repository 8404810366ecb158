pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::distance_matrix;

#[derive(Clone)]
pub struct State {
    pub client: distance_matrix::Client,
}

impl State {
    pub fn new(client: distance_matrix::Client) -> Self {
        Self { client }
    }
}

impl axum::extract::FromRef<State> for distance_matrix::Client {
    fn from_ref(input: &State) -> Self {
        input.client.clone()
    }
}

pub enum ApiError {
    InvalidInput,
    Upstream(distance_matrix::MatrixError),
}

impl From<distance_matrix::MatrixError> for ApiError {
    fn from(value: distance_matrix::MatrixError) -> Self {
        ApiError::Upstream(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input"),
            ApiError::Upstream(e) => {
                log::error!("distance matrix call failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to get drive times")
            }
        };

        let body = types::ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::distance_matrix::MatrixError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_input_maps_to_400() {
        let response = ApiError::InvalidInput.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid input"})
        );
    }

    #[tokio::test]
    async fn upstream_errors_map_to_generic_500() {
        let rejected = ApiError::Upstream(MatrixError::Rejected {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: String::new(),
        });
        let malformed =
            ApiError::Upstream(MatrixError::Malformed("expected 2 elements".to_string()));

        for error in [rejected, malformed] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Failed to get drive times"})
            );
        }
    }
}
