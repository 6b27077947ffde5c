//! Gemini API client
//!
//! Direct HTTP call to the `generateContent` endpoint, shared by the slide
//! text client and the slide image client. Handles transport status and
//! envelope decoding; interpreting the candidates is left to the caller.

use crate::generation::error::{GenerationError, Service};
use crate::generation::gemini_types::{GeminiApiRequest, GeminiApiResponse};

/// Call `{base_url}/models/{model}:generateContent` once
///
/// The credential travels as the `key` query parameter and is never logged.
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `base_url` - API base URL (e.g. `https://generativelanguage.googleapis.com/v1beta`)
/// * `model` - Model name
/// * `api_key` - Server-held API credential
/// * `request_body` - Request payload
/// * `service` - Which service is being called (for error reporting)
///
/// # Returns
/// * `Ok(GeminiApiResponse)` - The decoded response envelope
/// * `Err(GenerationError)` - Non-success status (`Transport`), send/read
///   failure (`Network`), or an undecodable body (`InvalidResponse`)
pub async fn generate_content(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    request_body: &GeminiApiRequest,
    service: Service,
) -> Result<GeminiApiResponse, GenerationError> {
    let url = format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    );

    tracing::debug!(
        url = %url,
        model = %model,
        service = %service,
        "Calling Gemini API"
    );

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            service = %service,
            error_body = %error_body,
            "Gemini API returned error status"
        );

        return Err(GenerationError::Transport {
            service,
            status: status_code,
        });
    }

    let response_body = response.text().await?;

    let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
        GenerationError::InvalidResponse(format!(
            "Failed to parse JSON response from Gemini API ({}): {}",
            service, e
        ))
    })?;

    tracing::debug!(
        service = %service,
        candidates = parsed.candidates.len(),
        "Received response from Gemini API"
    );

    Ok(parsed)
}
