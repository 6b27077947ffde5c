// Application state
// Holds the injected credential and the generation services shared by all requests

use crate::config::{Config, PresentationConfig};
use crate::generation::{
    FanOutOrchestrator, GeminiImageClient, GeminiTextClient, ImageGenerator, SlideTextGenerator,
};
use anyhow::Context;
use std::sync::Arc;

/// Shared, read-only state of the server
///
/// Nothing in here changes after startup; every request builds its own
/// presentation from scratch.
#[derive(Clone)]
pub struct AppState {
    /// Server-held API credential, resolved from configuration at startup
    api_key: Option<String>,
    /// Maximum accepted topic length in characters
    max_topic_length: usize,
    /// Slide text service
    text_generator: Arc<dyn SlideTextGenerator>,
    /// Per-slide image fan-out
    fan_out: FanOutOrchestrator,
}

impl AppState {
    /// Create state from explicit services
    pub fn new(
        api_key: Option<String>,
        text_generator: Arc<dyn SlideTextGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
        presentation: &PresentationConfig,
    ) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            max_topic_length: presentation.max_topic_length,
            text_generator,
            fan_out: FanOutOrchestrator::new(
                image_generator,
                presentation.fallback_image_url.clone(),
            ),
        }
    }

    /// Create state backed by the Gemini clients described in `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        let text_generator = Arc::new(GeminiTextClient::new(
            client.clone(),
            config.gemini.api_base_url.clone(),
            config.gemini.text_model.clone(),
        ));
        let image_generator = Arc::new(GeminiImageClient::new(
            client,
            config.gemini.api_base_url.clone(),
            config.gemini.image_model.clone(),
        ));

        Ok(Self::new(
            config.gemini.api_key.clone(),
            text_generator,
            image_generator,
            &config.presentation,
        ))
    }

    /// API credential, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Maximum accepted topic length in characters
    pub fn max_topic_length(&self) -> usize {
        self.max_topic_length
    }

    /// Slide text service
    pub fn text_generator(&self) -> &dyn SlideTextGenerator {
        self.text_generator.as_ref()
    }

    /// Per-slide image fan-out
    pub fn fan_out(&self) -> &FanOutOrchestrator {
        &self.fan_out
    }
}
