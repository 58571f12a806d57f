//! Request DTOs
//!
//! Data structures for API request bodies, validated at the boundary
//! before reaching the services.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "display_name must not be empty"))]
    pub display_name: String,

    #[validate(length(min = 1, message = "public_key must not be empty"))]
    pub public_key: String,

    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: String,

    #[validate(url(message = "avatar_url must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub phone_verified: bool,
}

/// Partial user update. public_key, phone_number and phone_verified
/// are locked after creation, so they have no fields here.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "display_name must not be empty"))]
    pub display_name: Option<String>,

    #[validate(url(message = "avatar_url must be a valid URL"))]
    pub avatar_url: Option<String>,

    pub last_active_at: Option<DateTime<Utc>>,
}

/// Create chat request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub chat_type: String,

    #[validate(length(min = 1, message = "participant_ids must not be empty"))]
    pub participant_ids: Vec<String>,
}

/// Partial chat update. All chat fields stay updatable.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateChatRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub chat_type: Option<String>,

    pub participant_ids: Option<Vec<String>>,

    pub last_message_at: Option<DateTime<Utc>>,
}
