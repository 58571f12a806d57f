//! Common Test Utilities
//!
//! Shared helpers driving the real router with an in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use talkhub_api::config::{CorsSettings, ServerSettings, Settings, StoreSettings};
use talkhub_api::infrastructure::store::MemoryStore;
use talkhub_api::presentation::http::routes;
use talkhub_api::startup::AppState;

/// Test application wrapping the full router over a fresh store
pub struct TestApp {
    pub router: Router,
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        store: StoreSettings {
            users_collection: "users".to_string(),
            chats_collection: "chats".to_string(),
        },
        environment: "test".to_string(),
    }
}

impl TestApp {
    /// Create a new test application with an empty in-memory store
    pub fn new() -> Self {
        let state = AppState::new(MemoryStore::new(), Arc::new(test_settings()));
        Self {
            router: routes::create_router(state),
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<&Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &Value) -> Response {
        self.request(Method::PUT, uri, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.request(Method::DELETE, uri, None).await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
