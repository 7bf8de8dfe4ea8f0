//! HTTP API module for the MVP webapp
//!
//! Wires the business routes through the request-metrics middleware and
//! exposes the Prometheus scrape endpoint.
//!
//! # Endpoints
//! - `GET /` — HTML index page
//! - `GET /api/hello` — JSON success endpoint
//! - `GET /api/error` — JSON simulated-failure endpoint
//! - `GET /metrics` — Prometheus metrics

pub mod handlers;
mod middleware;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

/// Creates the main Axum router with all endpoints.
///
/// The instrumentation middleware covers the three business routes only;
/// scrapes of `/metrics` do not count themselves.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/hello", get(handlers::api_hello))
        .route("/api/error", get(handlers::api_error))
        .route_layer(from_fn_with_state(state.clone(), middleware::track_requests))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
