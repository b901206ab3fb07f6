//! Integration tests for contact endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_contacts_requires_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/contacts", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_contacts_rejects_forged_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/contacts", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_contact_requires_first_name() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request(
            "POST",
            "/api/contacts",
            Some(json!({ "lastName": "Chen", "email": "amy@example.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"].is_object());
    assert_eq!(response.body["details"]["firstName"][0], "First name is required");
    assert!(response.body["details"].get("first_name").is_none());
}

#[tokio::test]
async fn test_create_contact_rejects_malformed_body() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request(
            "POST",
            "/api/contacts",
            Some(json!("just a string")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_contact_rejects_bad_id() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request(
            "PUT",
            "/api/contacts/not-a-uuid",
            Some(json!({ "firstName": "Amy", "lastName": "Chen" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
