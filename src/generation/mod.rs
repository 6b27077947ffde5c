//! Presentation generation module
//!
//! Building blocks of the generation pipeline: the two outbound clients
//! (slide text, slide images) behind traits, the per-slide image fan-out,
//! and the request/response data model.

pub mod api_client;
pub mod error;
pub mod fan_out;
pub mod gemini_types;
pub mod image_client;
pub mod prompts;
pub mod text_client;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{GenerationError, Service};
pub use fan_out::{FanOutOrchestrator, ImageOutcome};
pub use image_client::{GeminiImageClient, ImageGenerator};
pub use text_client::{GeminiTextClient, SlideTextGenerator};
pub use types::{
    ImageStyle, Presentation, PresentationOutline, PresentationRequest, Slide, SlideSpec,
    ValidatedRequest,
};
