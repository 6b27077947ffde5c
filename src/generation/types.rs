//! Presentation data model
//!
//! Request-scoped types flowing through the pipeline: the inbound request,
//! the text-only slide outline produced by the text service, and the final
//! presentation with one image URL per slide.

use crate::error::AppError;
use crate::generation::fan_out::ImageOutcome;
use serde::{Deserialize, Serialize};

/// Visual style requested for slide images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStyle {
    /// Cinematic, photorealistic phrasing
    Realistic,
    /// Clean vector-illustration phrasing (used for any non-realistic style)
    #[default]
    Illustrative,
}

impl ImageStyle {
    /// Parse a client-supplied style name
    ///
    /// Only `"realistic"` selects the photographic style; every other value
    /// falls back to the illustrative style.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("realistic") {
            ImageStyle::Realistic
        } else {
            ImageStyle::Illustrative
        }
    }
}

/// Inbound request body for `POST /api/generate`
///
/// Both fields are optional at the decoding level so that a missing field
/// can be reported as a client error instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRequest {
    /// Presentation topic
    #[serde(default)]
    pub topic: Option<String>,
    /// Image style name (`"realistic"` or anything else)
    #[serde(default)]
    pub image_style: Option<String>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Trimmed, non-empty topic
    pub topic: String,
    /// Parsed image style
    pub style: ImageStyle,
}

impl PresentationRequest {
    /// Create a request from a topic and style name
    pub fn new(topic: impl Into<String>, image_style: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            image_style: Some(image_style.into()),
        }
    }

    /// Validate the request
    ///
    /// # Returns
    /// * `Ok(ValidatedRequest)` - Topic and style are present and non-empty
    /// * `Err(AppError::InvalidRequest)` - A field is missing, blank, or the topic is too long
    pub fn validate(&self, max_topic_length: usize) -> Result<ValidatedRequest, AppError> {
        let topic = self
            .topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let image_style = self
            .image_style
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (topic, image_style) = match (topic, image_style) {
            (Some(topic), Some(style)) => (topic, style),
            _ => {
                return Err(AppError::InvalidRequest(
                    "topic and imageStyle are required".to_string(),
                ))
            }
        };

        if topic.chars().count() > max_topic_length {
            return Err(AppError::InvalidRequest(format!(
                "topic exceeds maximum length of {} characters",
                max_topic_length
            )));
        }

        Ok(ValidatedRequest {
            topic: topic.to_string(),
            style: ImageStyle::from_name(image_style),
        })
    }
}

/// Text-only slide content produced by the text service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSpec {
    /// Slide title
    pub title: String,
    /// Bullet points, in order
    pub content: Vec<String>,
    /// Speaker notes
    pub speaker_notes: String,
    /// Short descriptive prompt for the slide image
    pub image_prompt: String,
}

/// Presentation as returned by the text service, before images are attached
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationOutline {
    /// Presentation title
    pub presentation_title: String,
    /// Slides in presentation order (may be empty; checked by the caller)
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

/// Final slide: the slide spec plus its image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Text content of the slide
    #[serde(flatten)]
    pub spec: SlideSpec,
    /// Inline data URI of the generated image, or the fallback placeholder URL
    pub image_url: String,
}

/// Final presentation returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Presentation title
    pub presentation_title: String,
    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl PresentationOutline {
    /// Attach one image per slide, matching by index
    ///
    /// `images` must come from `FanOutOrchestrator::generate_all` for this
    /// outline's slides, so both sequences have the same length and order.
    pub fn with_images(self, images: Vec<ImageOutcome>) -> Presentation {
        debug_assert_eq!(self.slides.len(), images.len());
        let slides = self
            .slides
            .into_iter()
            .zip(images)
            .map(|(spec, image)| Slide {
                spec,
                image_url: image.into_url(),
            })
            .collect();

        Presentation {
            presentation_title: self.presentation_title,
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str) -> SlideSpec {
        SlideSpec {
            title: title.to_string(),
            content: vec!["point".to_string()],
            speaker_notes: "notes".to_string(),
            image_prompt: format!("{} illustration", title),
        }
    }

    #[test]
    fn test_image_style_from_name() {
        assert_eq!(ImageStyle::from_name("realistic"), ImageStyle::Realistic);
        assert_eq!(ImageStyle::from_name(" Realistic "), ImageStyle::Realistic);
        assert_eq!(ImageStyle::from_name("illustrative"), ImageStyle::Illustrative);
        assert_eq!(ImageStyle::from_name("watercolor"), ImageStyle::Illustrative);
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = PresentationRequest::new("  renewable energy ", "realistic");
        let validated = request.validate(100).unwrap();
        assert_eq!(validated.topic, "renewable energy");
        assert_eq!(validated.style, ImageStyle::Realistic);
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let missing_topic = PresentationRequest {
            topic: None,
            image_style: Some("realistic".into()),
        };
        let blank_topic = PresentationRequest::new("   ", "realistic");
        let missing_style = PresentationRequest {
            topic: Some("volcanoes".into()),
            image_style: None,
        };

        for request in [missing_topic, blank_topic, missing_style] {
            match request.validate(100) {
                Err(AppError::InvalidRequest(msg)) => assert!(msg.contains("required")),
                other => panic!("Expected InvalidRequest, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_long_topic() {
        let request = PresentationRequest::new("a".repeat(11), "realistic");
        assert!(matches!(
            request.validate(10),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: PresentationRequest =
            serde_json::from_str(r#"{"topic": "tides", "imageStyle": "illustrative"}"#).unwrap();
        assert_eq!(request.topic.as_deref(), Some("tides"));
        assert_eq!(request.image_style.as_deref(), Some("illustrative"));

        let empty: PresentationRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.topic.is_none());
        assert!(empty.image_style.is_none());
    }

    #[test]
    fn test_outline_without_slides_decodes_as_empty() {
        let outline: PresentationOutline =
            serde_json::from_str(r#"{"presentationTitle": "Empty"}"#).unwrap();
        assert!(outline.slides.is_empty());
    }

    #[test]
    fn test_outline_rejects_slide_missing_required_field() {
        let json = r#"{
            "presentationTitle": "Broken",
            "slides": [{"title": "A", "content": [], "speakerNotes": "n"}]
        }"#;
        assert!(serde_json::from_str::<PresentationOutline>(json).is_err());
    }

    #[test]
    fn test_with_images_preserves_order() {
        let outline = PresentationOutline {
            presentation_title: "Deck".to_string(),
            slides: vec![slide("A"), slide("B"), slide("C")],
        };
        let images = vec![
            ImageOutcome::Generated("data:image/png;base64,AAA".into()),
            ImageOutcome::Fallback {
                url: "https://placeholder".into(),
                reason: "blocked".into(),
            },
            ImageOutcome::Generated("data:image/png;base64,CCC".into()),
        ];

        let presentation = outline.with_images(images);
        let pairs: Vec<(&str, &str)> = presentation
            .slides
            .iter()
            .map(|s| (s.spec.title.as_str(), s.image_url.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A", "data:image/png;base64,AAA"),
                ("B", "https://placeholder"),
                ("C", "data:image/png;base64,CCC"),
            ]
        );
    }

    #[test]
    fn test_slide_serializes_flat_camel_case() {
        let slide = Slide {
            spec: slide("Intro"),
            image_url: "https://placeholder".to_string(),
        };
        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(value["title"], "Intro");
        assert_eq!(value["speakerNotes"], "notes");
        assert_eq!(value["imagePrompt"], "Intro illustration");
        assert_eq!(value["imageUrl"], "https://placeholder");
        assert!(value.get("spec").is_none());
    }
}
