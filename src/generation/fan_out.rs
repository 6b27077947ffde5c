//! Per-slide image fan-out
//!
//! Every slide's image is requested concurrently as its own task. The
//! orchestrator waits for all tasks to settle and returns one outcome per
//! slide, in slide order. A failed or panicked task resolves to the fallback
//! image; it never cancels siblings and never fails the batch.

use crate::generation::image_client::ImageGenerator;
use crate::generation::types::{ImageStyle, SlideSpec};
use futures_util::future::join_all;
use std::sync::Arc;

/// Result of one slide's image generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Inline data URI of the generated image
    Generated(String),
    /// Placeholder substituted after a failure
    Fallback {
        /// Fallback image URL
        url: String,
        /// Why generation failed (for logs only, never sent to clients)
        reason: String,
    },
}

impl ImageOutcome {
    /// URL to store in the slide, whichever way generation went
    pub fn into_url(self) -> String {
        match self {
            ImageOutcome::Generated(uri) => uri,
            ImageOutcome::Fallback { url, .. } => url,
        }
    }

    /// True if the fallback image was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageOutcome::Fallback { .. })
    }
}

/// Runs one image generation per slide and collects every outcome
#[derive(Clone)]
pub struct FanOutOrchestrator {
    images: Arc<dyn ImageGenerator>,
    fallback_image_url: String,
}

impl FanOutOrchestrator {
    /// Create an orchestrator over `images`, substituting `fallback_image_url` on failure
    pub fn new(images: Arc<dyn ImageGenerator>, fallback_image_url: impl Into<String>) -> Self {
        Self {
            images,
            fallback_image_url: fallback_image_url.into(),
        }
    }

    /// URL used for slides whose image failed
    pub fn fallback_image_url(&self) -> &str {
        &self.fallback_image_url
    }

    /// Generate one image per slide
    ///
    /// All calls are issued at once and awaited together (join-all, not
    /// first-to-finish). The returned vector has the same length and order as
    /// `slides`, regardless of completion order.
    pub async fn generate_all(
        &self,
        slides: &[SlideSpec],
        style: ImageStyle,
        api_key: &str,
    ) -> Vec<ImageOutcome> {
        let handles: Vec<_> = slides
            .iter()
            .map(|slide| {
                let images = Arc::clone(&self.images);
                let prompt = slide.image_prompt.clone();
                let api_key = api_key.to_string();
                tokio::spawn(async move { images.generate(&prompt, style, &api_key).await })
            })
            .collect();

        tracing::debug!(slides = handles.len(), ?style, "Image generation fanned out");

        let results = join_all(handles).await;

        let outcomes: Vec<ImageOutcome> = results
            .into_iter()
            .zip(slides)
            .enumerate()
            .map(|(index, (result, slide))| match result {
                Ok(Ok(data_uri)) => ImageOutcome::Generated(data_uri),
                Ok(Err(e)) => self.fallback(index, &slide.image_prompt, e.to_string()),
                Err(join_error) => self.fallback(
                    index,
                    &slide.image_prompt,
                    format!("image task aborted: {}", join_error),
                ),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.is_fallback()).count();
        tracing::info!(
            slides = outcomes.len(),
            failed = failed,
            "Image generation settled"
        );

        outcomes
    }

    fn fallback(&self, index: usize, prompt: &str, reason: String) -> ImageOutcome {
        tracing::warn!(
            slide_index = index,
            image_prompt = %prompt,
            reason = %reason,
            "Image generation failed, using fallback image"
        );
        ImageOutcome::Fallback {
            url: self.fallback_image_url.clone(),
            reason,
        }
    }
}
