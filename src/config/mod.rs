//! # Configuration Module
//!
//! Application configuration loading and management. Configuration can
//! be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)

mod settings;

pub use settings::*;
