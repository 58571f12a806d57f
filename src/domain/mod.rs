//! # Domain Layer
//!
//! Core business types of the TalkHub backend, independent of any
//! framework or storage concerns.
//!
//! - **entities**: Persisted records (User, Chat)
//! - **value_objects**: Immutable value types (RecordId)
//! - **store**: The `Collection` trait the document store must satisfy
//!
//! Repository-style contracts live here and are implemented in the
//! infrastructure layer, following the dependency inversion principle.

pub mod entities;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use store::{Collection, Document};
pub use value_objects::*;
