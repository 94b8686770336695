mod chat;
mod config;
mod errors;
mod generation;
mod latency;
mod panels;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::panels::session::spawn_idle_sweeper;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Profile Optimizer API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Simulated latency: profile={:?} job_fit={:?} content={:?} career={:?} chat={:?}",
        config.latency.profile,
        config.latency.job_fit,
        config.latency.content,
        config.latency.career,
        config.latency.chat
    );

    let state = AppState::new(config.clone());

    // Evict sessions nobody has touched within the idle TTL
    spawn_idle_sweeper(
        state.sessions.clone(),
        state.clipboard.clone(),
        config.session_idle_ttl,
        config.session_sweep_interval,
    );
    info!(
        "Session idle TTL {:?}, swept every {:?}",
        config.session_idle_ttl, config.session_sweep_interval
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
