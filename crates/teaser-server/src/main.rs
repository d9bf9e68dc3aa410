//! OrbiBrain Teaser Server
//!
//! Axum server hosting the compiled coming-soon page. The page is fully
//! client-side; this binary only serves its files and a health check.

mod handlers;
mod state;

use axum::{routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::health_check;
use crate::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    if config.index_file().exists() {
        tracing::info!("✓ Serving page from {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ {} not found", config.index_file().display());
        tracing::warn!("  Build the page first: cd crates/teaser-web && trunk build --release");
    }

    let addr = config.bind_addr.clone();
    let app = app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 teaser-server running on http://{}", addr);
    tracing::info!("  GET /health - Health check");
    tracing::info!("  GET /*      - Coming-soon page");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the router: health check, then static files with an `index.html` fallback
fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
