//! Command-line utility that generates one presentation without the HTTP server
//!
//! Usage: `generate_deck <topic> [image-style]`
//! Reads the same environment configuration as the server and prints the
//! presentation JSON to stdout.

use slide_deck_backend::api::presentation::build_presentation;
use slide_deck_backend::config::Config;
use slide_deck_backend::generation::PresentationRequest;
use slide_deck_backend::state::AppState;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let topic = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: generate_deck <topic> [realistic|illustrative]"))?;
    let image_style = args.next().unwrap_or_else(|| "illustrative".to_string());

    let config = Config::from_env();
    if config.gemini.api_key.is_none() {
        eprintln!("GOOGLE_API_KEY not found in environment");
        eprintln!("Make sure to export it: export GOOGLE_API_KEY=\"your-key\"");
    }

    let state = AppState::from_config(&config)?;
    let presentation = build_presentation(&state, PresentationRequest::new(topic, image_style))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let fallbacks = presentation
        .slides
        .iter()
        .filter(|s| s.image_url == config.presentation.fallback_image_url)
        .count();
    eprintln!(
        "Generated \"{}\": {} slides ({} with fallback image)",
        presentation.presentation_title,
        presentation.slides.len(),
        fallbacks
    );

    println!("{}", serde_json::to_string_pretty(&presentation)?);
    Ok(())
}
