//! Gemini API request and response types
//!
//! Structs that mirror the `generateContent` JSON format. Both the text and
//! the image client send a `GeminiApiRequest` and decode a `GeminiApiResponse`.

use serde::{Deserialize, Serialize};

/// Top-level Gemini API response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiResponse {
    /// List of candidate responses from the model
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Optional feedback about the prompt (e.g., if it was blocked)
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single candidate response from the model
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of this candidate (absent when generation was blocked)
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
    /// Moderation ratings; present when the candidate was filtered
    #[serde(default)]
    pub safety_ratings: Option<Vec<SafetyRating>>,
}

/// Content structure containing parts of the response
#[derive(Deserialize, Debug, Default)]
pub struct Content {
    /// List of content parts
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Role of the content (e.g., "model")
    #[serde(default)]
    pub role: Option<String>,
}

/// A single part of content: text or inline binary data
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content of this part
    #[serde(default)]
    pub text: Option<String>,
    /// Inline binary payload (base64) of this part
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded binary payload
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type reported by the API
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64 data (missing on some filtered responses)
    #[serde(default)]
    pub data: String,
}

/// A moderation rating attached to a candidate
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// Harm category (e.g., "HARM_CATEGORY_DANGEROUS_CONTENT")
    #[serde(default)]
    pub category: Option<String>,
    /// Probability bucket (e.g., "HIGH")
    #[serde(default)]
    pub probability: Option<String>,
    /// Whether this rating caused the block
    #[serde(default)]
    pub blocked: bool,
}

/// Feedback about the prompt (e.g., if it was blocked)
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked (if applicable)
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GeminiApiResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Text of the first part of the first candidate, if non-empty
    pub fn first_text(&self) -> Option<&str> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    /// First inline payload among the first candidate's parts
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .filter(|d| !d.data.is_empty())
    }

    /// Safety ratings of the first candidate, if the API attached any
    pub fn safety_ratings(&self) -> Option<&[SafetyRating]> {
        self.first_candidate()?.safety_ratings.as_deref()
    }

    /// Reason the prompt itself was blocked, if any
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

/// Summarize ratings as `CATEGORY:PROBABILITY` pairs for logs and errors
pub fn describe_safety_ratings(ratings: &[SafetyRating]) -> String {
    if ratings.is_empty() {
        return "no ratings reported".to_string();
    }
    let blocked: Vec<&SafetyRating> = ratings.iter().filter(|r| r.blocked).collect();
    let shown = if blocked.is_empty() {
        ratings.iter().collect()
    } else {
        blocked
    };
    shown
        .iter()
        .map(|r| {
            format!(
                "{}:{}",
                r.category.as_deref().unwrap_or("UNKNOWN"),
                r.probability.as_deref().unwrap_or("UNKNOWN")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Request structure for Gemini API
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiRequest {
    /// List of content items to send
    pub contents: Vec<RequestContent>,
    /// Optional system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<RequestContent>,
    /// Optional generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single text part for requests
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

impl RequestContent {
    /// Content consisting of a single text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![RequestPart { text: text.into() }],
        }
    }
}

/// Generation configuration for requests
#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type to force for response (e.g., "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the JSON response must follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Output modalities (e.g., `["IMAGE"]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}
