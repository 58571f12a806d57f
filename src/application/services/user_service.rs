//! User Service
//!
//! Handles user record management.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::domain::store::{Collection, Document};
use crate::domain::{RecordId, User};

use super::timestamp;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user record; the store assigns the identifier.
    async fn create_user(&self, create: CreateUserDto) -> Result<User, UserError>;

    /// Fetch a user by id token. Malformed tokens yield `None`.
    async fn get_user(&self, id: &str) -> Result<Option<User>, UserError>;

    /// Apply a partial update and return the refreshed record.
    async fn update_user(&self, id: &str, update: UpdateUserDto) -> Result<Option<User>, UserError>;

    /// Delete a user. Returns false for malformed or unknown ids.
    async fn delete_user(&self, id: &str) -> Result<bool, UserError>;

    /// All user records, unordered and unpaginated.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Create user request
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub display_name: String,
    pub public_key: String,
    pub phone_number: String,
    pub avatar_url: Option<String>,
    pub phone_verified: bool,
}

/// Partial update request. Only `Some` fields overwrite stored values.
/// public_key, phone_number, phone_verified and created_at are
/// immutable after creation and deliberately absent here.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub last_active_at: Option<DateTime<Utc>>,
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn require_non_empty(field: &str, value: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn validate_avatar_url(value: &str) -> Result<(), UserError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| UserError::Validation("avatar_url must be a valid URL".to_string()))
}

/// UserService implementation over any collection backend.
pub struct UserServiceImpl<C: Collection> {
    collection: Arc<C>,
}

impl<C: Collection> UserServiceImpl<C> {
    pub fn new(collection: Arc<C>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<C: Collection + 'static> UserService for UserServiceImpl<C> {
    async fn create_user(&self, create: CreateUserDto) -> Result<User, UserError> {
        require_non_empty("display_name", &create.display_name)?;
        require_non_empty("public_key", &create.public_key)?;
        require_non_empty("phone_number", &create.phone_number)?;
        if let Some(url) = &create.avatar_url {
            validate_avatar_url(url)?;
        }

        let now = Utc::now();
        let mut document = Document::new();
        document.insert(
            "display_name".to_string(),
            Value::String(create.display_name.clone()),
        );
        document.insert(
            "public_key".to_string(),
            Value::String(create.public_key.clone()),
        );
        if let Some(url) = &create.avatar_url {
            document.insert("avatar_url".to_string(), Value::String(url.clone()));
        }
        document.insert(
            "phone_number".to_string(),
            Value::String(create.phone_number.clone()),
        );
        document.insert(
            "phone_verified".to_string(),
            Value::Bool(create.phone_verified),
        );
        document.insert("created_at".to_string(), timestamp(now));
        document.insert("updated_at".to_string(), timestamp(now));

        let id = self
            .collection
            .insert(document)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(User {
            id,
            display_name: create.display_name,
            public_key: create.public_key,
            avatar_url: create.avatar_url,
            phone_number: create.phone_number,
            phone_verified: create.phone_verified,
            created_at: now,
            updated_at: now,
            last_active_at: None,
        })
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, UserError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(None);
        };

        let Some(document) = self
            .collection
            .find_one(&record_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
        else {
            return Ok(None);
        };

        let user = serde_json::from_value(Value::Object(document))
            .map_err(|e| UserError::Internal(format!("corrupt user document: {e}")))?;

        Ok(Some(user))
    }

    async fn update_user(&self, id: &str, update: UpdateUserDto) -> Result<Option<User>, UserError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(None);
        };

        let mut fields = Document::new();
        if let Some(display_name) = update.display_name {
            fields.insert("display_name".to_string(), Value::String(display_name));
        }
        if let Some(avatar_url) = update.avatar_url {
            validate_avatar_url(&avatar_url)?;
            fields.insert("avatar_url".to_string(), Value::String(avatar_url));
        }
        if let Some(last_active_at) = update.last_active_at {
            fields.insert("last_active_at".to_string(), timestamp(last_active_at));
        }

        // updated_at only moves when at least one field actually changes.
        if !fields.is_empty() {
            fields.insert("updated_at".to_string(), timestamp(Utc::now()));
            self.collection
                .update_fields(&record_id, fields)
                .await
                .map_err(|e| UserError::Internal(e.to_string()))?;
        }

        self.get_user(id).await
    }

    async fn delete_user(&self, id: &str) -> Result<bool, UserError> {
        let Some(record_id) = RecordId::parse(id) else {
            return Ok(false);
        };

        let removed = self
            .collection
            .delete_one(&record_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(removed > 0)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let documents = self
            .collection
            .find_all()
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        documents
            .into_iter()
            .map(|document| {
                serde_json::from_value(Value::Object(document))
                    .map_err(|e| UserError::Internal(format!("corrupt user document: {e}")))
            })
            .collect()
    }
}
