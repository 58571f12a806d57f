//! Document store implementations.
//!
//! The storage engine sits behind the domain's [`Collection`] trait.
//! The shipped backend is an in-process store that satisfies the
//! contract (per-document atomicity, store-assigned ids); a remote
//! document database slots in by implementing the same trait.
//!
//! [`Collection`]: crate::domain::Collection

mod memory;

pub use memory::{MemoryCollection, MemoryStore};
