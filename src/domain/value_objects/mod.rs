//! # Value Objects
//!
//! Immutable value types shared across the domain.

mod record_id;

pub use record_id::RecordId;
