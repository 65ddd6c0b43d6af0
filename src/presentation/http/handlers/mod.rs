//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod college;
pub mod fallback;
pub mod health;
