//! robo-advisor HTTP Server
//!
//! Axum-based adapter that accepts code hook events over HTTP and returns
//! the dialog action as JSON.

mod app;
mod config;
mod handlers;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();
    tracing::info!("Registered {} intents:", state.dispatcher.len());
    for name in state.dispatcher.names() {
        tracing::info!("  • {}", name);
    }

    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("robo-advisor server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST /invoke - Code hook event");

    axum::serve(listener, app).await?;

    Ok(())
}
