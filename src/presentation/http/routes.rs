//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new().nest("/colleges", college_routes())
}

/// College routes
fn college_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::college::get_all_colleges).post(handlers::college::create_college),
        )
        .route(
            "/{id}",
            get(handlers::college::get_college_by_id)
                .put(handlers::college::update_college)
                .delete(handlers::college::delete_college),
        )
}
