//! In-process document store.
//!
//! DashMap-backed implementation of the `Collection` contract. Each
//! entry is one document; DashMap's sharded locking gives the
//! per-document atomicity the contract requires. Documents are stored
//! without their `id` field, which is injected on every read, matching
//! how document databases surface their native key.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::domain::store::{Collection, Document};
use crate::domain::value_objects::RecordId;
use crate::shared::error::AppError;

/// A process-wide document store holding named collections.
///
/// Constructed once at startup and handed to the application state;
/// collections are created lazily on first access.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<String, Arc<MemoryCollection>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the collection with the given name.
    pub fn collection(&self, name: &str) -> Arc<MemoryCollection> {
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCollection::new()))
            .value()
            .clone()
    }
}

/// A single named collection of documents.
#[derive(Default)]
pub struct MemoryCollection {
    documents: DashMap<RecordId, Document>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_id(id: RecordId, mut document: Document) -> Document {
        document.insert("id".to_string(), Value::String(id.to_string()));
        document
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    async fn insert(&self, document: Document) -> Result<RecordId, AppError> {
        let id = RecordId::generate();
        self.documents.insert(id, document);
        Ok(id)
    }

    async fn find_one(&self, id: &RecordId) -> Result<Option<Document>, AppError> {
        Ok(self
            .documents
            .get(id)
            .map(|entry| Self::with_id(*id, entry.value().clone())))
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self
            .documents
            .iter()
            .map(|entry| Self::with_id(*entry.key(), entry.value().clone()))
            .collect())
    }

    async fn update_fields(&self, id: &RecordId, fields: Document) -> Result<(), AppError> {
        if let Some(mut entry) = self.documents.get_mut(id) {
            for (key, value) in fields {
                entry.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError> {
        Ok(self.documents.remove(id).map_or(0, |_| 1))
    }
}
