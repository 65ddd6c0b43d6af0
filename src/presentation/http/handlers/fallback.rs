//! Fallback Handlers
//!
//! Envelope responses for requests that match no route or no method.

use axum::http::{Method, Uri};

use crate::shared::error::AppError;

/// Unknown path
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {} {}", method, uri.path())).with_field("path")
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} not allowed for {}", method, uri.path()))
}
