//! Presentation generation API
//!
//! `POST /api/generate` turns `{ topic, imageStyle }` into a full slide deck.
//!
//! # Flow
//! 1. Validate the request (client errors stop here, before any external call)
//! 2. Resolve the server credential
//! 3. Generate the slide outline (fatal on failure)
//! 4. Fan out one image request per slide (failures become fallback images)
//! 5. Merge images into slides by index and respond

use crate::error::AppError;
use crate::generation::{
    GenerationError, Presentation, PresentationRequest, ValidatedRequest,
};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    Json,
};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Slide count the text model is asked to produce
pub const EXPECTED_SLIDE_COUNT: RangeInclusive<usize> = 5..=8;

/// Run the whole generation pipeline for one request
///
/// # Arguments
/// * `state` - Application state (credential and services)
/// * `request` - Decoded request body
///
/// # Returns
/// * `Ok(Presentation)` - Every slide carries an image URL (generated or fallback)
/// * `Err(AppError)` - Invalid request, missing credential, or text generation failure
pub async fn build_presentation(
    state: &AppState,
    request: PresentationRequest,
) -> Result<Presentation, AppError> {
    let ValidatedRequest { topic, style } = request.validate(state.max_topic_length())?;

    let api_key = state.api_key().ok_or_else(|| {
        AppError::Configuration("GOOGLE_API_KEY is not set on the server".to_string())
    })?;

    info!(topic_len = topic.len(), ?style, "Generating presentation");

    let outline = state.text_generator().generate(&topic, api_key).await?;

    if outline.slides.is_empty() {
        return Err(GenerationError::ContentGeneration(
            "the text model returned no slides".to_string(),
        )
        .into());
    }

    if !EXPECTED_SLIDE_COUNT.contains(&outline.slides.len()) {
        warn!(
            slides = outline.slides.len(),
            "Slide count outside the requested range"
        );
    }

    info!(
        slides = outline.slides.len(),
        title = %outline.presentation_title,
        "Slide outline generated"
    );

    let images = state
        .fan_out()
        .generate_all(&outline.slides, style, api_key)
        .await;

    Ok(outline.with_images(images))
}

/// POST /api/generate - Generate a presentation
///
/// Body decoding failures are reported as 400 with the usual error body.
/// Every failure is logged here before it is turned into a response.
pub async fn generate_presentation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PresentationRequest>, JsonRejection>,
) -> Result<Json<Presentation>, AppError> {
    let result = match payload {
        Ok(Json(request)) => build_presentation(&state, request).await,
        Err(rejection) => Err(AppError::InvalidRequest(rejection.body_text())),
    };

    result.map(Json).map_err(|e| {
        if e.is_client_error() {
            warn!(error = %e, "Rejected presentation request");
        } else {
            error!(error = %e, "Presentation generation failed");
        }
        e
    })
}

/// Fallback for any non-POST method on `/api/generate`
pub async fn method_not_allowed(method: Method) -> AppError {
    warn!(method = %method, "Method not allowed");
    AppError::MethodNotAllowed(method.to_string())
}
