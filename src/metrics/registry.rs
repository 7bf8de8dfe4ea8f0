// SPDX-License-Identifier: MIT

//! Prometheus metrics registry for HTTP request instrumentation

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::metrics::labels::{EndpointLabels, HttpLabels};

/// Latency buckets in seconds (the classic Prometheus defaults)
const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Thread-safe accumulator for HTTP request metrics.
///
/// Owned by the application state and shared across handlers; the
/// underlying families are internally synchronized, so recording from
/// concurrent requests needs no extra locking.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // requests by (method, path, status), created lazily on first hit
    request_count: Family<HttpLabels, Counter>,
    // request latency distribution per path
    request_latency_seconds: Family<EndpointLabels, Histogram>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let request_count = Family::<HttpLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests",
            request_count.clone(),
        );

        let request_latency_seconds =
            Family::<EndpointLabels, Histogram>::new_with_constructor(|| {
                Histogram::new(LATENCY_BUCKETS.into_iter())
            });
        registry.register(
            "http_request_latency_seconds",
            "HTTP request latency in seconds",
            request_latency_seconds.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            request_count,
            request_latency_seconds,
        }
    }

    /// Records one handled request: increments the counter for
    /// (method, path, status) and observes the latency for the path.
    pub fn record_request(&self, method: &str, path: &str, status: u16, latency_secs: f64) {
        self.request_count
            .get_or_create(&HttpLabels {
                method: method.to_string(),
                path: path.to_string(),
                status,
            })
            .inc();
        self.request_latency_seconds
            .get_or_create(&EndpointLabels {
                path: path.to_string(),
            })
            .observe(latency_secs);
    }

    /// Encodes the registry in the OpenMetrics text format
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    /// Current counter value for a (method, path, status) series
    pub fn request_count(&self, labels: &HttpLabels) -> u64 {
        self.request_count.get_or_create(labels).get()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
