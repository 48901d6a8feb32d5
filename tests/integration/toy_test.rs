//! Integration tests for the toy catalog endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn names(body: &Value) -> Vec<String> {
    body["toys"]
        .as_array()
        .expect("toys array")
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

async fn seed_catalog(app: &TestApp, cookie: &str) {
    let toys = [
        json!({"name": "Talking Doll", "price": 30, "labels": ["Doll", "Battery Powered"], "inStock": true}),
        json!({"name": "Race Car", "price": 45, "labels": ["On wheels", "Battery Powered"], "inStock": false}),
        json!({"name": "Chess", "price": 25, "labels": ["Box game"], "inStock": true}),
        json!({"name": "art kit", "price": 15, "labels": ["Art"], "inStock": true}),
        json!({"name": "Wooden Train", "price": 60, "labels": ["On wheels", "Baby"], "inStock": true}),
    ];
    for toy in toys {
        app.add_toy(cookie, toy).await;
    }
}

#[tokio::test]
async fn test_query_paginates_four_per_page() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    seed_catalog(&app, &cookie).await;

    let first = app.request("GET", "/api/toy?sortBy=name&sortDir=1", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["totalCount"], 5);
    assert_eq!(first.body["pageSize"], 4);
    assert_eq!(
        names(&first.body),
        vec!["art kit", "Chess", "Race Car", "Talking Doll"]
    );

    let second = app
        .request("GET", "/api/toy?sortBy=name&sortDir=1&pageIdx=1", None, None)
        .await;
    assert_eq!(names(&second.body), vec!["Wooden Train"]);

    let beyond = app.request("GET", "/api/toy?pageIdx=7", None, None).await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert_eq!(beyond.body["totalCount"], 5);
    assert!(beyond.body["toys"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_query_filters_by_label_and_price() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    seed_catalog(&app, &cookie).await;

    let wheels = app
        .request("GET", "/api/toy?labels=On%20wheels&sortBy=price&sortDir=-1", None, None)
        .await;
    assert_eq!(wheels.status, StatusCode::OK);
    assert_eq!(names(&wheels.body), vec!["Wooden Train", "Race Car"]);

    let both = app
        .request("GET", "/api/toy?labels=On%20wheels,Battery%20Powered", None, None)
        .await;
    assert_eq!(names(&both.body), vec!["Race Car"]);

    let priced = app
        .request(
            "GET",
            "/api/toy?minPrice=20&maxPrice=30&sortBy=price&sortDir=1",
            None,
            None,
        )
        .await;
    assert_eq!(names(&priced.body), vec!["Chess", "Talking Doll"]);

    let by_name = app.request("GET", "/api/toy?name=TRAIN", None, None).await;
    assert_eq!(names(&by_name.body), vec!["Wooden Train"]);
}

#[tokio::test]
async fn test_blank_query_fields_are_ignored() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    seed_catalog(&app, &cookie).await;

    let response = app
        .request(
            "GET",
            "/api/toy?name=&minPrice=&maxPrice=&labels=&sortBy=&sortDir=&pageIdx=",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalCount"], 5);
}

#[tokio::test]
async fn test_unknown_label_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/toy?labels=Spaceship", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_add_toy_requires_login() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/toy", Some(json!({"name": "Kite", "price": 10})), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_toy_sets_owner_and_defaults() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;

    let toy = app.add_toy(&cookie, json!({"name": "  Kite ", "price": 10})).await;
    assert_eq!(toy["name"], "Kite");
    assert_eq!(toy["inStock"], true);
    assert_eq!(toy["owner"]["fullname"], "Muki Ja");
    assert!(toy["messages"].as_array().unwrap().is_empty());

    let id = toy["id"].as_str().unwrap();
    let fetched = app.request("GET", &format!("/api/toy/{id}"), None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], toy["id"]);
}

#[tokio::test]
async fn test_add_toy_rejects_negative_price() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;

    let response = app
        .request(
            "POST",
            "/api/toy",
            Some(json!({"name": "Kite", "price": -1})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_toy_merges_fields() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let toy = app
        .add_toy(&cookie, json!({"name": "Kite", "price": 10, "labels": ["Outdoor"]}))
        .await;
    let id = toy["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/toy/{id}"),
            Some(json!({"price": 12.5, "inStock": false})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Kite");
    assert_eq!(response.body["price"], 12.5);
    assert_eq!(response.body["inStock"], false);
    assert_eq!(response.body["labels"], json!(["Outdoor"]));
}

#[tokio::test]
async fn test_missing_toy_is_not_found() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let missing = uuid::Uuid::new_v4();

    let get = app.request("GET", &format!("/api/toy/{missing}"), None, None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.body["error"], "NOT_FOUND");

    let put = app
        .request(
            "PUT",
            &format!("/api/toy/{missing}"),
            Some(json!({"price": 1})),
            Some(&cookie),
        )
        .await;
    assert_eq!(put.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_toy_requires_admin() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let toy = app.add_toy(&cookie, json!({"name": "Kite", "price": 10})).await;
    let path = format!("/api/toy/{}", toy["id"].as_str().unwrap());

    let anonymous = app.request("DELETE", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let user = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(user.status, StatusCode::FORBIDDEN);

    let admin = app.login_admin().await;
    let removed = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["deleted"], 1);

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_messages_are_added_and_removed() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let toy = app.add_toy(&cookie, json!({"name": "Kite", "price": 10})).await;
    let toy_path = format!("/api/toy/{}", toy["id"].as_str().unwrap());

    let added = app
        .request(
            "POST",
            &format!("{toy_path}/msg"),
            Some(json!({"txt": "Is it still available?"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.body["text"], "Is it still available?");
    assert_eq!(added.body["author"]["fullname"], "Muki Ja");
    let msg_id = added.body["id"].as_str().unwrap().to_string();

    let fetched = app.request("GET", &toy_path, None, None).await;
    assert_eq!(fetched.body["messages"].as_array().unwrap().len(), 1);

    let msg_path = format!("{toy_path}/msg/{msg_id}");
    let forbidden = app.request("DELETE", &msg_path, None, Some(&cookie)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let admin = app.login_admin().await;
    let removed = app.request("DELETE", &msg_path, None, Some(&admin)).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["messageId"], msg_id.as_str());

    let fetched = app.request("GET", &toy_path, None, None).await;
    assert!(fetched.body["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_message_on_missing_toy_is_not_found() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    let missing = uuid::Uuid::new_v4();

    let response = app
        .request(
            "POST",
            &format!("/api/toy/{missing}/msg"),
            Some(json!({"text": "hello"})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_labels_and_counts() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    seed_catalog(&app, &cookie).await;

    let labels = app.request("GET", "/api/toy/labels", None, None).await;
    assert_eq!(labels.status, StatusCode::OK);
    assert_eq!(labels.body.as_array().unwrap().len(), 8);
    assert_eq!(labels.body[0], "On wheels");

    let counts = app.request("GET", "/api/toy/labels/count", None, None).await;
    assert_eq!(counts.status, StatusCode::OK);
    assert_eq!(counts.body["On wheels"]["total"], 2);
    assert_eq!(counts.body["On wheels"]["inStock"], 1);
    assert_eq!(counts.body["Puzzle"]["total"], 0);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = TestApp::new().await;
    let cookie = app.signup("muki", "muki123", "Muki Ja").await;
    seed_catalog(&app, &cookie).await;

    let response = app.request("GET", "/api/toy/dashboard", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.body;
    assert_eq!(body["avgPricePerLabel"]["On wheels"], 52.5);
    assert_eq!(body["avgPricePerLabel"]["Battery Powered"], 37.5);
    assert_eq!(body["inStockPercentByLabel"]["On wheels"], 50.0);
    assert_eq!(body["inStockPercentByLabel"]["Art"], 100.0);

    let trend = body["trend"].as_array().unwrap();
    assert_eq!(trend.len(), 6);
    assert_eq!(trend[5]["value"], 5);
}
