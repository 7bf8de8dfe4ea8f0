// SPDX-License-Identifier: MIT

mod api;
mod index;
mod metrics;

pub use api::{api_error, api_hello};
pub use index::index;
pub use metrics::metrics_handler;
