//! Quantum Coach HTTP Server
//!
//! Axum-based REST API in front of the `quantum-advisor` engine.

mod config;
mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{
    chat_handler, health_check, list_assets, list_profiles, market_status, optimize_handler,
};
use crate::state::AppState;

/// Build the application router
fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/profiles", get(list_profiles))
        .route("/api/assets", get(list_assets))
        .route("/api/market-status", get(market_status))
        // Advisor API
        .route("/api/chat", post(chat_handler))
        .route("/api/optimize", post(optimize_handler))
        .layer(config.cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Catalogs are built once and shared read-only
    let state = AppState::builtin();
    let profiles = state.coach.profiles();
    tracing::info!("Loaded {} profiles:", profiles.len());
    for profile in &profiles {
        tracing::info!("  • {} ({}, r={})", profile.name, profile.id, profile.risk_aversion);
    }

    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("QuantumCoach API running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health            - Health check");
    tracing::info!("  GET  /api/profiles      - Portfolio profiles");
    tracing::info!("  GET  /api/assets        - Assets by category");
    tracing::info!("  GET  /api/market-status - Simulated IBEX 35 status");
    tracing::info!("  POST /api/chat          - Chat with the advisor");
    tracing::info!("  POST /api/optimize      - Direct optimization");

    axum::serve(listener, app).await?;

    Ok(())
}
