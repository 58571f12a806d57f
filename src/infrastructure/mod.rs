//! # Infrastructure Layer
//!
//! Concrete implementations of the domain's storage contract.

pub mod store;
