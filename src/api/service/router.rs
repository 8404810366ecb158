use axum::routing::post;

use super::State;
use super::endpoints::calculate;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/api/calculate", post(calculate))
        .with_state(state)
}
