use std::process::ExitCode;

use tracing::{error, info};

use ecosystem_server::config::AppConfig;
use ecosystem_server::maps::{MapsClient, MapsConfig};
use ecosystem_server::ns::{NsClient, NsConfig};
use ecosystem_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    ecosystem_server::logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast if either API key is missing
    let config = AppConfig::from_env()?;
    info!(?config, "configuration loaded");

    let ns = NsClient::new(
        NsConfig::new(&config.ns_api_key).with_timeout(config.upstream_timeout_secs),
    )?;
    let maps = MapsClient::new(
        MapsConfig::new(&config.google_maps_api_key).with_timeout(config.upstream_timeout_secs),
    )?;

    let state = AppState::new(ns, maps);
    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Ecosystem API listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health");
    info!("  GET  /api/train/stations");
    info!("  GET  /api/train/departures/{{station_code}}");
    info!("  GET  /api/maps/geocode?address=...");
    info!("  GET  /api/maps/directions?origin=...&destination=...&mode=...");
    info!("  POST /api/trains/rail_routes");
    info!("  POST /api/car/road_routes");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
