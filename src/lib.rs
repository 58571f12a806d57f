//! # TalkHub API
//!
//! Backend for the TalkHub messaging application: a CRUD layer over two
//! resources (users, chats) backed by a document store.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, the RecordId value object, and the
//!   Collection storage contract
//! - **Application Layer**: Resource services and DTOs
//! - **Infrastructure Layer**: Document store implementation
//! - **Presentation Layer**: HTTP handlers, routes, middleware
//!
//! ## Module Structure
//!
//! ```text
//! talkhub_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, store contract
//! +-- application/    Resource services and DTOs
//! +-- infrastructure/ Document store implementation
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business types
pub mod domain;

// Application layer - Resource services
pub mod application;

// Infrastructure layer - Storage implementation
pub mod infrastructure;

// Presentation layer - HTTP adapters
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
