//! Integration tests for sign-in and session lookup.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{DEV_EMAIL, DEV_PASSWORD, TestApp};

#[tokio::test]
async fn test_signin_with_dev_credentials() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": DEV_EMAIL, "password": DEV_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(response.body.get("expiresAt").is_some());
    assert_eq!(response.body["user"]["email"], DEV_EMAIL);
}

#[tokio::test]
async fn test_signin_rejects_malformed_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "not-an-email", "password": DEV_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"].get("email").is_some());
}

#[tokio::test]
async fn test_signin_rejects_short_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": DEV_EMAIL, "password": "abc" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"].get("password").is_some());
}

#[tokio::test]
async fn test_signin_wrong_password_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": DEV_EMAIL, "password": "wrong-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_session_returns_signed_in_user() {
    let app = TestApp::new();
    let token = app.sign_in().await;

    let response = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], DEV_EMAIL);
}

#[tokio::test]
async fn test_session_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/session", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}
