//! Resource Services
//!
//! One service per resource, each sitting directly on a `Collection`.
//! "Not found" is a normal `Ok(None)` / `Ok(false)` outcome, never an
//! error variant; only validation failures and store failures surface
//! as errors.

mod chat_service;
mod user_service;

pub use chat_service::{ChatError, ChatService, ChatServiceImpl, CreateChatDto, UpdateChatDto};
pub use user_service::{CreateUserDto, UpdateUserDto, UserError, UserService, UserServiceImpl};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Encode a timestamp for storage. Nanosecond precision is kept so a
/// record read back compares equal to the entity returned at write
/// time.
pub(crate) fn timestamp(value: DateTime<Utc>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::Nanos, true))
}
