//! Integration tests for the user directory.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn user_id(app: &TestApp, username: &str) -> String {
    let response = app.request("GET", "/api/user", None, None).await;
    response
        .body
        .as_array()
        .expect("user list")
        .iter()
        .find(|u| u["username"] == username)
        .and_then(|u| u["id"].as_str())
        .expect("user in list")
        .to_string()
}

#[tokio::test]
async fn test_list_users_hides_password_hash() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;

    let response = app.request("GET", "/api/user", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
async fn test_get_user() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;
    let id = user_id(&app, "muki").await;

    let response = app.request("GET", &format!("/api/user/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fullname"], "Muki Ja");

    let missing = uuid::Uuid::new_v4();
    let response = app.request("GET", &format!("/api/user/{missing}"), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_updates_own_fullname() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let id = user_id(&app, "muki").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/user/{id}"),
            Some(json!({"fullname": " Muki Jr "})),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fullname"], "Muki Jr");
}

#[tokio::test]
async fn test_user_cannot_update_someone_else() {
    let app = TestApp::new().await;
    app.signup("muki", "muki123", "Muki Ja").await;
    let puki = app.signup("puki", "puki123", "Puki Ba").await;
    let muki_id = user_id(&app, "muki").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/user/{muki_id}"),
            Some(json!({"fullname": "Hacked"})),
            Some(&puki),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin = app.login_admin().await;
    let response = app
        .request(
            "PUT",
            &format!("/api/user/{muki_id}"),
            Some(json!({"fullname": "Renamed By Admin"})),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fullname"], "Renamed By Admin");
}

#[tokio::test]
async fn test_remove_user_requires_admin() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let id = user_id(&app, "muki").await;
    let path = format!("/api/user/{id}");

    let response = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin = app.login_admin().await;
    let response = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
