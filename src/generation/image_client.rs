//! Slide image generation
//!
//! A pure single-prompt-to-single-image call. The client knows nothing about
//! other slides; fan-out and fallback live in `fan_out`.

use crate::generation::api_client;
use crate::generation::error::{GenerationError, Service};
use crate::generation::gemini_types::describe_safety_ratings;
use crate::generation::prompts;
use crate::generation::types::ImageStyle;
use async_trait::async_trait;

/// Produces one image for one slide prompt
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for `prompt` and return it as a data URI
    async fn generate(
        &self,
        prompt: &str,
        style: ImageStyle,
        api_key: &str,
    ) -> Result<String, GenerationError>;
}

/// Wrap a base64 PNG payload into a data URI
pub fn png_data_uri(base64_payload: &str) -> String {
    format!("data:image/png;base64,{}", base64_payload)
}

/// `ImageGenerator` backed by the Gemini image model
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiImageClient {
    /// Create a client for `model` at `base_url`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageClient {
    async fn generate(
        &self,
        prompt: &str,
        style: ImageStyle,
        api_key: &str,
    ) -> Result<String, GenerationError> {
        let request = prompts::image_request(prompt, style);
        let response = api_client::generate_content(
            &self.client,
            &self.base_url,
            &self.model,
            api_key,
            &request,
            Service::Image,
        )
        .await?;

        if let Some(inline) = response.first_inline_data() {
            return Ok(png_data_uri(&inline.data));
        }

        if let Some(ratings) = response.safety_ratings() {
            let summary = describe_safety_ratings(ratings);
            tracing::warn!(prompt = %prompt, ratings = %summary, "Image generation blocked");
            return Err(GenerationError::SafetyBlocked(summary));
        }

        if let Some(reason) = response.block_reason() {
            tracing::warn!(prompt = %prompt, reason = %reason, "Image prompt blocked");
            return Err(GenerationError::SafetyBlocked(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        Err(GenerationError::InvalidResponse(
            "image response contains no inline image data".to_string(),
        ))
    }
}
