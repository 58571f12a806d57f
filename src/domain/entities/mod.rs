//! # Domain Entities
//!
//! Persisted records of the TalkHub backend. Each entity mirrors the
//! document shape held in its store collection; the `id` field is
//! injected by the store on reads.
//!
//! - **User**: An account with cryptographic identity material and
//!   private contact data (phone fields never leave the backend).
//! - **Chat**: A conversation record referencing participants by user
//!   id value only; no referential integrity is enforced.

mod chat;
mod user;

pub use chat::Chat;
pub use user::User;
