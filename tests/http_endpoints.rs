// SPDX-License-Identifier: MIT

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mvp_webapp::{AppState, Config, HttpLabels, MetricsRegistry, create_router};
use std::sync::Arc;
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    Arc::new(AppState {
        config: Config::default(),
        metrics: MetricsRegistry::new(),
    })
}

fn labels(method: &str, path: &str, status: u16) -> HttpLabels {
    HttpLabels {
        method: method.to_string(),
        path: path.to_string(),
        status,
    }
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

// --- / endpoint ---

#[tokio::test]
async fn index_returns_200_with_greeting() {
    let state = make_state();
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("<h1>Hello from MVP Test App</h1>"));
}

// --- /api/hello endpoint ---

#[tokio::test]
async fn api_hello_returns_200_with_expected_body() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .oneshot(Request::get("/api/hello").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["message"], "hello");
    assert_eq!(body["status"], "ok");

    assert_eq!(
        state.metrics.request_count(&labels("GET", "/api/hello", 200)),
        1
    );
}

// --- /api/error endpoint ---

#[tokio::test]
async fn api_error_returns_500_with_expected_body() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .oneshot(Request::get("/api/error").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(body["error"], "simulated");

    assert_eq!(
        state.metrics.request_count(&labels("GET", "/api/error", 500)),
        1
    );
}

// --- instrumentation ---

#[tokio::test]
async fn counter_advances_by_one_per_request() {
    let state = make_state();
    let key = labels("GET", "/api/hello", 200);

    for expected in 1..=3 {
        let app = create_router(state.clone());
        app.oneshot(Request::get("/api/hello").body(String::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(state.metrics.request_count(&key), expected);
    }
}

#[tokio::test]
async fn latency_histogram_tracks_each_request() {
    let state = make_state();

    for _ in 0..2 {
        let app = create_router(state.clone());
        app.oneshot(Request::get("/api/hello").body(String::new()).unwrap())
            .await
            .unwrap();
    }

    let body = state.metrics.encode_metrics().await.unwrap();
    let count_line = body
        .lines()
        .find(|l| {
            l.starts_with("http_request_latency_seconds_count")
                && l.contains("path=\"/api/hello\"")
        })
        .expect("histogram count series missing");
    assert!(count_line.ends_with(" 2"), "unexpected line: {count_line}");
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_returns_200_with_openmetrics_content_type() {
    let state = make_state();
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        ct.contains("openmetrics-text"),
        "Expected OpenMetrics content-type, got: {ct}"
    );
}

#[tokio::test]
async fn metrics_reflects_prior_requests() {
    let state = make_state();

    let app = create_router(state.clone());
    app.oneshot(Request::get("/api/hello").body(String::new()).unwrap())
        .await
        .unwrap();

    let app = create_router(state);
    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    let body = body_string(resp).await;
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("method=\"GET\""));
    assert!(body.contains("path=\"/api/hello\""));
    assert!(body.contains("status=\"200\""));
    assert!(body.contains("http_request_latency_seconds_count"));
}

#[tokio::test]
async fn counters_are_non_decreasing_across_scrapes() {
    let state = make_state();
    let key = labels("GET", "/api/error", 500);

    let app = create_router(state.clone());
    app.oneshot(Request::get("/api/error").body(String::new()).unwrap())
        .await
        .unwrap();
    let first = state.metrics.request_count(&key);

    // A scrape must not reset or window anything
    let app = create_router(state.clone());
    app.oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(state.metrics.request_count(&key), first);

    let app = create_router(state.clone());
    app.oneshot(Request::get("/api/error").body(String::new()).unwrap())
        .await
        .unwrap();
    assert!(state.metrics.request_count(&key) > first);
}
