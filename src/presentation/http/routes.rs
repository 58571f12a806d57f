//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Service identity and health endpoints
        .route("/", get(handlers::health::service_info))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/users", get(handlers::user::list_users))
        .route("/users/{user_id}", get(handlers::user::get_user))
        .route("/users/{user_id}", put(handlers::user::update_user))
        .route("/users/{user_id}", delete(handlers::user::delete_user))
        .route("/chats", post(handlers::chat::create_chat))
        .route("/chats", get(handlers::chat::list_chats))
        .route("/chats/{chat_id}", get(handlers::chat::get_chat))
        .route("/chats/{chat_id}", put(handlers::chat::update_chat))
        .route("/chats/{chat_id}", delete(handlers::chat::delete_chat))
}
