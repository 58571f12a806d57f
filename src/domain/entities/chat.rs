//! Chat entity.
//!
//! Maps to the `chats` collection in the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// A conversation record as stored in the `chats` collection.
///
/// `chat_type` is a free-form tag (e.g. "private", "group"), not an
/// enum; clients own the vocabulary. `participant_ids` reference user
/// identifiers by value only, so a chat may point at users that never
/// existed or have since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Conversation kind tag
    #[serde(rename = "type")]
    pub chat_type: String,

    /// Participant user ids, ordered as supplied (non-empty at creation)
    pub participant_ids: Vec<String>,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the most recent message, set by clients via update
    #[serde(default)]
    pub last_message_at: Option<DateTime<Utc>>,
}
