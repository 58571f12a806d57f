//! Document store contract.
//!
//! The storage engine is an external collaborator; the core only
//! depends on this minimal CRUD surface. Implementations must provide
//! per-document atomicity for single-document reads and writes. The
//! core makes no multi-document transactional guarantees and performs
//! no retries: a failing store call surfaces as `AppError::Store` and
//! fails that single operation.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::value_objects::RecordId;
use crate::shared::error::AppError;

/// A schemaless record as held by the store. Documents returned from
/// read operations carry an `id` field holding the record identifier.
pub type Document = Map<String, Value>;

/// Generic document CRUD primitive keyed by [`RecordId`].
#[async_trait]
pub trait Collection: Send + Sync {
    /// Insert a document and return the store-assigned identifier.
    async fn insert(&self, document: Document) -> Result<RecordId, AppError>;

    /// Fetch a single document by id.
    async fn find_one(&self, id: &RecordId) -> Result<Option<Document>, AppError>;

    /// Fetch every document in the collection, in no particular order.
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    /// Atomically merge the given fields into an existing document.
    /// A miss is not an error; callers detect absence via `find_one`.
    async fn update_fields(&self, id: &RecordId, fields: Document) -> Result<(), AppError>;

    /// Delete a document by id, returning the number removed (0 or 1).
    async fn delete_one(&self, id: &RecordId) -> Result<u64, AppError>;
}
