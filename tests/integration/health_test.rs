//! Integration tests for the health probe and request ids.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

use helpers::TestApp;

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::new().await;

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "banca-test-1")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.send(req).await;

    assert_eq!(
        response.headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("banca-test-1")
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/periodoAcesso/listar", None).await;

    let id = response
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing request id");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/files", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
