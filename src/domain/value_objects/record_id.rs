//! Record identifier value object.
//!
//! The document store assigns every record an opaque token (a UUID v4
//! here). The core never constructs or interprets these tokens beyond
//! parsing inbound path parameters: a token that fails to parse is
//! indistinguishable from one that resolves to no record, so callers
//! get a "not found" outcome rather than a parse error.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, store-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier. Only the store implementation
    /// should call this; services receive ids from the store.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an inbound token. Returns `None` for malformed tokens,
    /// which callers must treat exactly like an absent record.
    pub fn parse(token: &str) -> Option<Self> {
        Uuid::parse_str(token).ok().map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
