// SPDX-License-Identifier: MIT

//! Request metrics module for the MVP webapp
//!
//! Contains label types and the Prometheus metrics registry.

mod labels;
mod registry;

/// Labels for request counters and latency histograms
pub use labels::{EndpointLabels, HttpLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
