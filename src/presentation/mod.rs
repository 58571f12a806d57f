//! # Presentation Layer
//!
//! HTTP adapters: route configuration, request handlers, middleware.

pub mod http;
pub mod middleware;
