mod models;
mod service;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use skybound_core::{OpenRouterGenerator, TravelQueryService};
use tracing::{Level, info};

use crate::models::ServiceConfig;
use crate::service::{AppState, build_router};

/// Cosmetic link-status toggle shown in /health. Flips every 5 s and never
/// touches the query path.
fn spawn_status_toggle(flag: Arc<AtomicBool>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(5));
        loop {
            ticker.tick().await;
            flag.fetch_xor(true, Ordering::Relaxed);
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .compact()
        .init();

    info!("Starting SkyBound travel search service");

    let config = ServiceConfig::from_env();
    info!(model = %config.model, "using generation model");

    let generator = Arc::new(OpenRouterGenerator::new(config.model.clone()));
    let query = Arc::new(TravelQueryService::new(generator));
    let state = AppState::new(query);

    spawn_status_toggle(state.link_encrypted.clone());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);

    info!("Available endpoints:");
    info!("  GET  /              - Service documentation");
    info!("  GET  /health        - Health check");
    info!("  GET  /cities        - Popular city suggestions");
    info!("  POST /search        - Run a travel search");
    info!("  GET  /search/state  - Current search lifecycle state");

    axum::serve(listener, app).await?;

    Ok(())
}
