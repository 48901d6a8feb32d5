//! Integration tests for authentication flow.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_sets_login_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "username": "muki",
                "password": "muki123",
                "fullname": "Muki Ja",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fullname"], "Muki Ja");
    assert_eq!(response.body["isAdmin"], false);
    assert!(response.body.get("passwordHash").is_none());

    let cookie = response.cookie.expect("login cookie");
    let prefix = format!("{}=", app.config.auth.cookie_name);
    assert!(cookie.starts_with(&prefix));
    assert!(cookie.len() > prefix.len());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "username": "MUKI",
                "password": "other123",
                "fullname": "Other Muki",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({"username": "muki", "password": "muki123"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "muki", "password": "muki123"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fullname"], "Muki Ja");
    assert!(response.cookie.is_some());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "muki", "password": "wrongpassword"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.cookie.is_none());
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "nobody", "password": "password123"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_login_carries_admin_flag() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "username": crate::helpers::ADMIN_USERNAME,
                "password": crate::helpers::ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAdmin"], true);
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = TestApp::new().await;
    let cookie = format!("{}=not.a.token", app.config.auth.cookie_name);

    let response = app
        .request(
            "POST",
            "/api/toy",
            Some(json!({"name": "Kite", "price": 10})),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cleared = response.cookie.expect("removal cookie");
    assert_eq!(cleared, format!("{}=", app.config.auth.cookie_name));

    let after = app
        .request(
            "POST",
            "/api/toy",
            Some(json!({"name": "Kite", "price": 10})),
            Some(&cleared),
        )
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
