//! Response DTOs
//!
//! Fixed-field output projections. The internal record never crosses
//! the boundary directly: each view lists exactly the fields it
//! exposes, so private data (phone_number, phone_verified) cannot leak
//! by accident.

use serde::Serialize;

use crate::domain::{Chat, User};

/// Public view of a user. Strips phone_number and phone_verified.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub display_name: String,
    pub public_key: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            display_name: user.display_name,
            public_key: user.public_key,
            avatar_url: user.avatar_url,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Full view of a chat, used for single-record fetches. Omits
/// updated_at.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub participant_ids: Vec<String>,
    pub last_message_at: Option<String>,
    pub created_at: String,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id.to_string(),
            chat_type: chat.chat_type,
            participant_ids: chat.participant_ids,
            last_message_at: chat.last_message_at.map(|t| t.to_rfc3339()),
            created_at: chat.created_at.to_rfc3339(),
        }
    }
}

/// Summary view of a chat for list displays. Omits created_at and
/// updated_at.
#[derive(Debug, Serialize)]
pub struct ChatSummaryResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub participant_ids: Vec<String>,
    pub last_message_at: Option<String>,
}

impl From<Chat> for ChatSummaryResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id.to_string(),
            chat_type: chat.chat_type,
            participant_ids: chat.participant_ids,
            last_message_at: chat.last_message_at.map(|t| t.to_rfc3339()),
        }
    }
}
