//! # Application Layer
//!
//! Resource services and their DTOs. Services own the only non-trivial
//! logic in the system: field validation, partial-update semantics,
//! identifier handling, and timestamp management.

pub mod dto;
pub mod services;
