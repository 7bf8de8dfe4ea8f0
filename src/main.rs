// SPDX-License-Identifier: MIT

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mvp_webapp::{AppState, Config, MetricsRegistry, Result, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return Err(mvp_webapp::AppError::Config(e));
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        metrics: MetricsRegistry::new(),
    });

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("MVP webapp starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /          - HTML index page");
    tracing::info!("  - GET /api/hello - JSON success endpoint");
    tracing::info!("  - GET /api/error - JSON simulated failure");
    tracing::info!("  - GET /metrics   - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

fn setup_tracing() {
    // Respect RUST_LOG; fall back to "info" when unset
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
