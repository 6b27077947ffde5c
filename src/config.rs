//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The API credential is read here once and injected
//! into the application state; nothing else reads the environment.

use std::env;
use std::fmt;

/// Default base URL of the generative language API
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for slide text generation
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Default model used for slide image generation
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Placeholder shown for a slide whose image could not be generated
pub const DEFAULT_FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/800x450/e2e8f0/94a3b8?text=Failed+to+load+image";

/// Maximum topic length in characters
pub const DEFAULT_MAX_TOPIC_LENGTH: usize = 10_000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Generative API configuration
    pub gemini: GeminiConfig,
    /// Presentation generation configuration
    pub presentation: PresentationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Generative API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// Server-held API credential (never accepted from clients)
    pub api_key: Option<String>,
    /// API base URL shared by both models
    pub api_base_url: String,
    /// Text generation model name
    pub text_model: String,
    /// Image generation model name
    pub image_model: String,
}

/// Presentation generation configuration
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// URL substituted when a slide image fails
    pub fallback_image_url: String,
    /// Maximum accepted topic length in characters
    pub max_topic_length: usize,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_GEMINI_API_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
            max_topic_length: DEFAULT_MAX_TOPIC_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            gemini: GeminiConfig {
                api_key: non_empty_var("GOOGLE_API_KEY").or_else(|| non_empty_var("GEMINI_API_KEY")),
                api_base_url: non_empty_var("GEMINI_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string()),
                text_model: non_empty_var("GEMINI_TEXT_MODEL")
                    .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
                image_model: non_empty_var("GEMINI_IMAGE_MODEL")
                    .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            },
            presentation: PresentationConfig {
                fallback_image_url: non_empty_var("FALLBACK_IMAGE_URL")
                    .unwrap_or_else(|| DEFAULT_FALLBACK_IMAGE_URL.to_string()),
                max_topic_length: env::var("MAX_TOPIC_LENGTH")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .filter(|l| *l > 0)
                    .unwrap_or(DEFAULT_MAX_TOPIC_LENGTH),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read an environment variable, treating an empty value as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
