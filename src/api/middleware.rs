// SPDX-License-Identifier: MIT

//! Request-metrics instrumentation middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use super::AppState;

/// Wraps a route with timing and counting.
///
/// Runs the inner handler, then increments the request counter for
/// (method, path, status) and observes the elapsed time for the path.
/// The response itself passes through unchanged.
pub async fn track_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed().as_secs_f64();

    let status = response.status().as_u16();
    state.metrics.record_request(&method, &path, status, latency);

    tracing::debug!("{} {} -> {} in {:.6}s", method, path, status, latency);

    response
}
