use axum::http::Method;
use drive_times::api::distance_matrix::client::{Client, DISTANCE_MATRIX_URL};
use drive_times::api::service;
use drive_times::config::{Config, REQUIRED_VARIABLES};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let client = Client::new(DISTANCE_MATRIX_URL, config.maps_api_key)?;
    let state = service::State::new(client);

    let mut router = service::router::router(state);

    if config.allow_any_origin {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_origin(Any)
            .allow_headers(Any);

        router = router.layer(cors);
    }

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
