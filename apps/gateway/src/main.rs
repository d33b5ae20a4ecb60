//! `flightdeck-gateway`: serves `/health`, `/api/flights`, `/api/airports`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use flightdeck_common::constants::ENV_API_KEY;
use flightdeck_gateway::{app, AppState, GatewayConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = GatewayConfig::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let key_configured = state.credential_configured();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Aviation-Edge proxy listening on http://{addr}");
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("Flights API: http://localhost:{}/api/flights", config.port);
    tracing::info!("Airports API: http://localhost:{}/api/airports", config.port);
    if key_configured {
        tracing::info!("Aviation-Edge API key configured");
    } else {
        tracing::warn!("{ENV_API_KEY} not set; /api routes will answer 500");
    }

    axum::serve(listener, app(state)).await?;

    Ok(())
}
