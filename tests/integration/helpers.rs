//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use toybox_api::AppState;
use toybox_core::config::{AppConfig, BootstrapAdmin};
use toybox_database::{MemoryToyStore, MemoryUserStore};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty catalog and one admin
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.token_secret = "integration-test-secret".to_string();
        let admin = BootstrapAdmin {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            fullname: "Admin".to_string(),
        };

        let state = AppState::new(
            config.clone(),
            Arc::new(MemoryToyStore::new()),
            Arc::new(MemoryUserStore::new()),
        )
        .expect("Failed to build app state");
        state
            .auth_service
            .ensure_admin(&admin)
            .await
            .expect("Failed to create admin");

        let router = toybox_api::build_router(state);

        Self { router, config }
    }

    /// Sign up a new account and return its login cookie
    pub async fn signup(&self, username: &str, password: &str, fullname: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(json!({
                    "username": username,
                    "password": password,
                    "fullname": fullname,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );

        response.cookie.expect("No login cookie in signup response")
    }

    /// Login and return the login cookie
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.cookie.expect("No login cookie in login response")
    }

    /// Login as the seeded admin
    pub async fn login_admin(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// Add a toy and return its JSON representation
    pub async fn add_toy(&self, cookie: &str, body: Value) -> Value {
        let response = self.request("POST", "/api/toy", Some(body), Some(cookie)).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Add toy failed: {:?}",
            response.body
        );
        response.body
    }

    /// Make an HTTP request to the test app
    ///
    /// `cookie` is sent verbatim as the `Cookie` header.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// `name=value` part of the `Set-Cookie` header, if any
    pub cookie: Option<String>,
}
