//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Labels for the request counter: one series per (method, path, status)
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    pub path: String,
    pub status: u16,
}

/// Labels for the latency histogram: one series per path
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct EndpointLabels {
    pub path: String,
}
