// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! Re-exports commonly used types so users of the library can bring
//! everything in with:
//!
//! ```rust
//! use mvp_webapp::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::{AppState, create_router};

// Metrics types
pub use crate::metrics::{EndpointLabels, HttpLabels, MetricsRegistry};
