//! Generation-specific error types
//!
//! Errors raised by the two outbound generative services (slide text and
//! slide images). Whether an error is fatal depends on the call site: text
//! failures abort the request, image failures are replaced by a fallback.

use std::fmt;
use thiserror::Error;

/// Which outbound service produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Structured slide text generation
    Text,
    /// Per-slide image generation
    Image,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Text => f.write_str("text"),
            Service::Image => f.write_str("image"),
        }
    }
}

/// Errors that can occur while talking to a generative service
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The service answered with a non-success HTTP status
    #[error("API error ({service}): HTTP {status}")]
    Transport {
        /// Service that returned the status
        service: Service,
        /// HTTP status code
        status: u16,
    },

    /// The request could not be sent or the response body could not be read
    ///
    /// The request URL is stripped before the error is stored, since it
    /// carries the API key as a query parameter.
    #[error("Failed to reach generative API: {0}")]
    Network(reqwest::Error),

    /// The response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The image request was blocked by content moderation
    #[error("Image blocked by safety filter: {0}")]
    SafetyBlocked(String),

    /// The text service produced no slides
    #[error("Content generation failed: {0}")]
    ContentGeneration(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Network(e.without_url())
    }
}

impl GenerationError {
    /// HTTP status carried by a transport failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Transport { status, .. } => Some(*status),
            GenerationError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
