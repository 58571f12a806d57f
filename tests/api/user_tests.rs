//! User API endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, TestApp};

fn alice() -> serde_json::Value {
    json!({
        "display_name": "Alice",
        "public_key": "pk-alice",
        "phone_number": "+15550001",
    })
}

#[tokio::test]
async fn test_create_user_returns_201_with_public_view() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/users", &alice()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["display_name"], "Alice");
    assert_eq!(body["public_key"], "pk-alice");
    assert!(body["id"].is_string());
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_user_response_hides_phone_fields() {
    let app = TestApp::new();

    let body = body_json(app.post_json("/api/v1/users", &alice()).await).await;

    assert!(body.get("phone_number").is_none());
    assert!(body.get("phone_verified").is_none());
}

#[tokio::test]
async fn test_create_user_missing_public_key_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/users",
            &json!({
                "display_name": "Alice",
                "phone_number": "+15550001",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_user_empty_display_name_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/users",
            &json!({
                "display_name": "",
                "public_key": "pk",
                "phone_number": "+15550001",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_user_invalid_avatar_url_returns_422() {
    let app = TestApp::new();

    let mut body = alice();
    body["avatar_url"] = json!("definitely not a url");

    let response = app.post_json("/api/v1/users", &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_user_returns_created_record() {
    let app = TestApp::new();

    let created = body_json(app.post_json("/api/v1/users", &alice()).await).await;
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["display_name"], "Alice");
    assert_eq!(fetched["public_key"], "pk-alice");
}

#[tokio::test]
async fn test_get_user_with_malformed_id_returns_404() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/not-a-valid-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_with_unknown_id_returns_404() {
    let app = TestApp::new();

    let response = app
        .get("/api/v1/users/00000000-0000-4000-8000-000000000000")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_applies_partial_fields() {
    let app = TestApp::new();

    let created = body_json(app.post_json("/api/v1/users", &alice()).await).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .put_json(
            &format!("/api/v1/users/{id}"),
            &json!({"display_name": "Alice Cooper"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["display_name"], "Alice Cooper");
    assert_eq!(updated["public_key"], "pk-alice");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_update_user_with_empty_body_returns_record_unchanged() {
    let app = TestApp::new();

    let created = body_json(app.post_json("/api/v1/users", &alice()).await).await;
    let id = created["id"].as_str().unwrap();

    let response = app.put_json(&format!("/api/v1/users/{id}"), &json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let refreshed = body_json(response).await;
    assert_eq!(refreshed["display_name"], created["display_name"]);
    assert_eq!(refreshed["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_update_user_unknown_id_returns_404() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/api/v1/users/00000000-0000-4000-8000-000000000000",
            &json!({"display_name": "Ghost"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let app = TestApp::new();

    let created = body_json(app.post_json("/api/v1/users", &alice()).await).await;
    let id = created["id"].as_str().unwrap();

    let first = app.delete(&format!("/api/v1/users/{id}")).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app.delete(&format!("/api/v1/users/{id}")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_malformed_id_returns_404() {
    let app = TestApp::new();

    let response = app.delete("/api/v1/users/garbage").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_returns_public_views() {
    let app = TestApp::new();

    app.post_json("/api/v1/users", &alice()).await;
    app.post_json(
        "/api/v1/users",
        &json!({
            "display_name": "Bob",
            "public_key": "pk-bob",
            "phone_number": "+15550002",
        }),
    )
    .await;

    let response = app.get("/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("phone_number").is_none());
        assert!(user.get("phone_verified").is_none());
    }
}
