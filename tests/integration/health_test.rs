//! Integration tests for health probes.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_is_ok() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_ready_reports_unreachable_database() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health/ready", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
