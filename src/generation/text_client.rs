//! Slide text generation
//!
//! One request per presentation: the topic goes in, a typed slide outline
//! comes out. Any failure here is fatal for the whole request.

use crate::generation::api_client;
use crate::generation::error::{GenerationError, Service};
use crate::generation::prompts;
use crate::generation::types::PresentationOutline;
use async_trait::async_trait;

/// Produces the text-only outline of a presentation
#[async_trait]
pub trait SlideTextGenerator: Send + Sync {
    /// Generate the slide outline for `topic`
    async fn generate(
        &self,
        topic: &str,
        api_key: &str,
    ) -> Result<PresentationOutline, GenerationError>;
}

/// `SlideTextGenerator` backed by the Gemini `generateContent` API
#[derive(Debug, Clone)]
pub struct GeminiTextClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiTextClient {
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
impl SlideTextGenerator for GeminiTextClient {
    async fn generate(
        &self,
        topic: &str,
        api_key: &str,
    ) -> Result<PresentationOutline, GenerationError> {
        let request = prompts::slide_outline_request(topic);
        let response = api_client::generate_content(
            &self.client,
            &self.base_url,
            &self.model,
            api_key,
            &request,
            Service::Text,
        )
        .await?;

        if let Some(reason) = response.block_reason() {
            return Err(GenerationError::InvalidResponse(format!(
                "Gemini API blocked the prompt: {}",
                reason
            )));
        }

        let text = response.first_text().ok_or_else(|| {
            GenerationError::InvalidResponse(
                "text response contains no generated slide outline".to_string(),
            )
        })?;

        let outline: PresentationOutline = serde_json::from_str(text).map_err(|e| {
            GenerationError::InvalidResponse(format!(
                "generated slide outline is not valid JSON: {}",
                e
            ))
        })?;

        tracing::debug!(
            topic_len = topic.len(),
            slides = outline.slides.len(),
            "Decoded slide outline"
        );

        Ok(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const MODEL: &str = "text-model";

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    fn client(server: &ServerGuard) -> GeminiTextClient {
        GeminiTextClient::new(reqwest::Client::new(), server.url(), MODEL)
    }

    #[tokio::test]
    async fn test_generate_success() {
        let outline = json!({
            "presentationTitle": "Renewable Energy",
            "slides": [{
                "title": "Why it matters",
                "content": ["Climate", "Cost"],
                "speakerNotes": "Open with the big picture.",
                "imagePrompt": "wind farm on rolling green hills"
            }]
        });

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": prompts::slide_outline_schema()
                }
            })))
            .with_status(200)
            .with_body(envelope(&outline.to_string()))
            .create_async()
            .await;

        let result = client(&server)
            .generate("renewable energy", "test-key")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.presentation_title, "Renewable Energy");
        assert_eq!(result.slides.len(), 1);
        assert_eq!(result.slides[0].content, vec!["Climate", "Cost"]);
        assert_eq!(
            result.slides[0].image_prompt,
            "wind farm on rolling green hills"
        );
    }

    #[tokio::test]
    async fn test_generate_error_status_is_transport_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body(r#"{"error": {"message": "overloaded"}}"#)
            .expect(1)
            .create_async()
            .await;

        let result = client(&server).generate("tides", "test-key").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(GenerationError::Transport {
                service: Service::Text,
                status: 503
            })
        ));
    }

    #[tokio::test]
    async fn test_generate_missing_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let result = client(&server).generate("tides", "test-key").await;

        mock.assert_async().await;
        match result {
            Err(GenerationError::InvalidResponse(msg)) => {
                assert!(msg.contains("no generated slide outline"))
            }
            other => panic!("Expected InvalidResponse, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_malformed_outline_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(envelope("{\"presentationTitle\": \"Cut off"))
            .create_async()
            .await;

        let result = client(&server).generate("tides", "test-key").await;

        mock.assert_async().await;
        match result {
            Err(GenerationError::InvalidResponse(msg)) => assert!(msg.contains("not valid JSON")),
            other => panic!("Expected InvalidResponse, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_blocked_prompt() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}"#)
            .create_async()
            .await;

        let result = client(&server).generate("tides", "test-key").await;

        mock.assert_async().await;
        match result {
            Err(GenerationError::InvalidResponse(msg)) => {
                assert!(msg.contains("blocked the prompt"))
            }
            other => panic!("Expected InvalidResponse, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_slide_list_is_returned_as_is() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/text-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(envelope(r#"{"presentationTitle": "Nothing", "slides": []}"#))
            .create_async()
            .await;

        let outline = client(&server).generate("tides", "test-key").await.unwrap();
        assert!(outline.slides.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_does_not_expose_key() {
        let client = GeminiTextClient::new(reqwest::Client::new(), "http://127.0.0.1:1", MODEL);

        let result = client.generate("tides", "secret-text-key").await;

        match result {
            Err(e @ GenerationError::Network(_)) => {
                assert!(!e.to_string().contains("secret-text-key"));
                assert!(!format!("{:?}", e).contains("secret-text-key"));
            }
            other => panic!("Expected Network error, got: {:?}", other),
        }
    }
}
