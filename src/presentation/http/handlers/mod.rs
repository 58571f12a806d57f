//! HTTP Handlers

pub mod chat;
pub mod health;
pub mod user;
