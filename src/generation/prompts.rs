//! Prompt and schema builders
//!
//! The fixed instruction and strict output schema for slide text generation,
//! and the style-conditioned phrasing for slide images.

use crate::generation::gemini_types::{GeminiApiRequest, GenerationConfig, RequestContent};
use crate::generation::types::ImageStyle;
use serde_json::json;

/// System instruction for the slide text model
pub const SLIDE_SYSTEM_INSTRUCTION: &str = "You are an expert presentation designer. \
Create a slide deck about the user's topic. For every slide, provide a title, content as a list \
of bullet points, speaker notes, and a short, descriptive image prompt (5-10 words) for a \
text-to-image model. The image prompt must capture the visual essence of the slide content. \
Produce between 5 and 8 slides. The output must be JSON that follows the schema.";

/// Fields every generated slide must carry
pub const REQUIRED_SLIDE_FIELDS: [&str; 4] = ["title", "content", "speakerNotes", "imagePrompt"];

/// User query embedding the topic
pub fn slide_user_query(topic: &str) -> String {
    format!("Create a presentation on the topic: \"{}\"", topic)
}

/// Strict response schema for the slide outline
pub fn slide_outline_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "presentationTitle": { "type": "STRING" },
            "slides": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "speakerNotes": { "type": "STRING" },
                        "imagePrompt": { "type": "STRING" }
                    },
                    "required": REQUIRED_SLIDE_FIELDS
                }
            }
        },
        "required": ["presentationTitle", "slides"]
    })
}

/// Full request for the slide text model
pub fn slide_outline_request(topic: &str) -> GeminiApiRequest {
    GeminiApiRequest {
        contents: vec![RequestContent::text(slide_user_query(topic))],
        system_instruction: Some(RequestContent::text(SLIDE_SYSTEM_INSTRUCTION)),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(slide_outline_schema()),
            ..Default::default()
        }),
    }
}

/// Expand a short slide image prompt into a full style-conditioned prompt
pub fn styled_image_prompt(prompt: &str, style: ImageStyle) -> String {
    match style {
        ImageStyle::Realistic => format!(
            "A cinematic, photorealistic, high-quality photograph of: {}.",
            prompt
        ),
        ImageStyle::Illustrative => format!(
            "A clean, simple, illustrative, digital art style, vector illustration of: {}.",
            prompt
        ),
    }
}

/// Full request for the image model
pub fn image_request(prompt: &str, style: ImageStyle) -> GeminiApiRequest {
    GeminiApiRequest {
        contents: vec![RequestContent::text(styled_image_prompt(prompt, style))],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..Default::default()
        }),
    }
}
