//! API module
//!
//! Contains HTTP request handlers and the router that wires them up

pub mod health;
pub mod presentation;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the application router
///
/// Middleware (request ids, tracing, CORS) is layered on by the server binary.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/generate",
            post(presentation::generate_presentation)
                .fallback(presentation::method_not_allowed),
        )
        .with_state(state)
}
