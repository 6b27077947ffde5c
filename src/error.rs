//! Error types and error handling for the application
//!
//! This module defines the HTTP-facing error type. All errors implement
//! `IntoResponse` so that handlers return a consistent `{ error, status }` body.
//! The surface is intentionally flat: client input problems map to 4xx,
//! everything else maps to a single 500.

use crate::generation::GenerationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is missing fields or is malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP method is not accepted by the endpoint
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Server is missing required configuration (e.g. the API credential)
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// An outbound generative service failed
    #[error("{0}")]
    Generation(#[from] GenerationError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code this error is rendered with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for errors caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
