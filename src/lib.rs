// SPDX-License-Identifier: MIT

//! # MVP Webapp
//!
//! Minimal demonstration web service instrumented with Prometheus
//! request metrics.
//!
//! Every business route is wrapped by a middleware that counts the
//! request (labelled by method, path and status) and observes its
//! latency; `GET /metrics` exposes both in the OpenMetrics text format.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and the instrumentation middleware
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus metrics registry and label sets
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod metrics;
pub mod prelude;

/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Metrics registry and labels
pub use metrics::{EndpointLabels, HttpLabels, MetricsRegistry};
