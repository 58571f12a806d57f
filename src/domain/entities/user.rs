//! User entity.
//!
//! Maps to the `users` collection in the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// A user account record as stored in the `users` collection.
///
/// `phone_number` and `phone_verified` are internal-only fields: they
/// are stored and carried through the service layer but stripped from
/// every outbound representation. Phone verification itself is not
/// implemented; the flag is a plain stored boolean with no side
/// effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Display name (non-empty)
    pub display_name: String,

    /// Cryptographic identity material, treated as opaque text
    pub public_key: String,

    /// Avatar image URL (validated at the boundary, stored as text)
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Contact phone number, never exposed in output
    pub phone_number: String,

    /// Whether the phone number has been verified (defaults false)
    #[serde(default)]
    pub phone_verified: bool,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Last activity timestamp, set by clients via update
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
}
