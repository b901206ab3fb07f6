//! Integration tests for deal endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_deal_rejects_unknown_status() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request(
            "POST",
            "/api/deals",
            Some(json!({ "title": "Renewal", "amount": 1200, "status": "pending" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_deal_requires_title() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request(
            "POST",
            "/api/deals",
            Some(json!({ "amount": "500" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"].get("title").is_some());
}

#[tokio::test]
async fn test_delete_deal_requires_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "DELETE",
            "/api/deals/6f1c1b7e-0a4f-4a43-9f39-3f7c2a9d8e11",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
