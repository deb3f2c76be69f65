mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use taskhub::api::handlers::{create_user_handler, list_users_handler};

fn app(state: taskhub::AppState) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_create_and_list_users() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/users")
        .json(&json!({
            "user_name": "Ada",
            "user_email": "ada@example.com",
            "user_bdate": "1815-12-10"
        }))
        .await;

    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["user_id"], 1);
    assert_eq!(created["user_bdate"], "1815-12-10");

    let response = server.get("/users").await;

    response.assert_status_ok();
    let users: Vec<Value> = response.json();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_name"], "Ada");
    assert_eq!(users[0]["user_email"], "ada@example.com");
}

#[tokio::test]
async fn test_create_user_validation() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/users")
        .json(&json!({
            "user_name": "",
            "user_email": "not-an-email",
            "user_bdate": "1815-12-10"
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_user_bad_date_rejected() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/users")
        .json(&json!({
            "user_name": "Ada",
            "user_email": "ada@example.com",
            "user_bdate": "10.12.1815"
        }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_list_users_pagination() {
    let (state, store) = common::create_test_state();
    for name in ["Ada", "Grace", "Linus"] {
        common::seed_user(&store, name).await;
    }
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .get("/users")
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();
    let users: Vec<Value> = response.json();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_name"], "Linus");
}

#[tokio::test]
async fn test_list_users_invalid_page_size() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/users").add_query_param("page_size", 1001).await;

    response.assert_status_bad_request();
}
