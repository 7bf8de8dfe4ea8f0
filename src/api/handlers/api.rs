use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Response body for the success endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub status: String,
}

/// Response body for the simulated-failure endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/hello
///
/// JSON success endpoint.
pub async fn api_hello() -> impl IntoResponse {
    let response = HelloResponse {
        message: "hello".to_string(),
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /api/error
///
/// Unconditionally returns a fixed 500 with a static payload. This is a
/// simulated failure, not a caught one.
pub async fn api_error() -> impl IntoResponse {
    let response = ErrorResponse {
        error: "simulated".to_string(),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
}
