//! Chat Service
//!
//! Handles chat record management. Unlike users, chats have no locked
//! identity fields: type and participant_ids stay freely updatable
//! after creation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::store::{Collection, Document};
use crate::domain::{Chat, RecordId};

use super::timestamp;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create a chat record; the store assigns the identifier.
    async fn create_chat(&self, create: CreateChatDto) -> Result<Chat, ChatError>;

    /// Fetch a chat by id token. Malformed tokens yield `None`.
    async fn get_chat(&self, id: &str) -> Result<Option<Chat>, ChatError>;

    /// Apply a partial update and return the refreshed record.
    async fn update_chat(&self, id: &str, update: UpdateChatDto) -> Result<Option<Chat>, ChatError>;

    /// Delete a chat. Returns false for malformed or unknown ids.
    async fn delete_chat(&self, id: &str) -> Result<bool, ChatError>;

    /// All chat records, unordered and unpaginated.
    async fn list_chats(&self) -> Result<Vec<Chat>, ChatError>;
}

/// Create chat request
#[derive(Debug, Clone)]
pub struct CreateChatDto {
    pub chat_type: String,
    pub participant_ids: Vec<String>,
}

/// Partial update request. Only `Some` fields overwrite stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateChatDto {
    pub chat_type: Option<String>,
    pub participant_ids: Option<Vec<String>>,
    pub last_message_at: Option<DateTime<Utc>>,
}

/// Chat service errors
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ChatService implementation over any collection backend.
pub struct ChatServiceImpl<C: Collection> {
    collection: Arc<C>,
}

impl<C: Collection> ChatServiceImpl<C> {
    pub fn new(collection: Arc<C>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<C: Collection + 'static> ChatService for ChatServiceImpl<C> {
    async fn create_chat(&self, create: CreateChatDto) -> Result<Chat, ChatError> {
        if create.chat_type.trim().is_empty() {
            return Err(ChatError::Validation("type must not be empty".to_string()));
        }
        if create.participant_ids.is_empty() {
            return Err(ChatError::Validation(
                "participant_ids must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let mut document = Document::new();
        document.insert("type".to_string(), Value::String(create.chat_type.clone()));
        document.insert(
            "participant_ids".to_string(),
            Value::Array(
                create
                    .participant_ids
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        document.insert("created_at".to_string(), timestamp(now));
        document.insert("updated_at".to_string(), timestamp(now));

        let id = self
            .collection
            .insert(document)
            .await
            .map_err(|e| ChatError::Internal(e.to_string()))?;

        Ok(Chat {
            id,
            chat_type: create.chat_type,
            participant_ids: create.participant_ids,
            created_at: now,
            updated_at: now,
            last_message_at: None,
        })
    }

    async fn get_chat(&self, id: &str) -> Result<Option<Chat>, ChatError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(None);
        };

        let Some(document) = self
            .collection
            .find_one(&record_id)
            .await
            .map_err(|e| ChatError::Internal(e.to_string()))?
        else {
            return Ok(None);
        };

        let chat = serde_json::from_value(Value::Object(document))
            .map_err(|e| ChatError::Internal(format!("corrupt chat document: {e}")))?;

        Ok(Some(chat))
    }

    async fn update_chat(&self, id: &str, update: UpdateChatDto) -> Result<Option<Chat>, ChatError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(None);
        };

        let mut fields = Document::new();
        if let Some(chat_type) = update.chat_type {
            fields.insert("type".to_string(), Value::String(chat_type));
        }
        if let Some(participant_ids) = update.participant_ids {
            fields.insert(
                "participant_ids".to_string(),
                Value::Array(participant_ids.into_iter().map(Value::String).collect()),
            );
        }
        if let Some(last_message_at) = update.last_message_at {
            fields.insert("last_message_at".to_string(), timestamp(last_message_at));
        }

        // updated_at only moves when at least one field actually changes.
        if !fields.is_empty() {
            fields.insert("updated_at".to_string(), timestamp(Utc::now()));
            self.collection
                .update_fields(&record_id, fields)
                .await
                .map_err(|e| ChatError::Internal(e.to_string()))?;
        }

        self.get_chat(id).await
    }

    async fn delete_chat(&self, id: &str) -> Result<bool, ChatError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(false);
        };

        let removed = self
            .collection
            .delete_one(&record_id)
            .await
            .map_err(|e| ChatError::Internal(e.to_string()))?;

        Ok(removed > 0)
    }

    async fn list_chats(&self) -> Result<Vec<Chat>, ChatError> {
        let documents = self
            .collection
            .find_all()
            .await
            .map_err(|e| ChatError::Internal(e.to_string()))?;

        documents
            .into_iter()
            .map(|document| {
                serde_json::from_value(Value::Object(document))
                    .map_err(|e| ChatError::Internal(format!("corrupt chat document: {e}")))
            })
            .collect()
    }
}
