//! In-process fakes of the two generative services for unit tests.

use crate::generation::error::{GenerationError, Service};
use crate::generation::image_client::{png_data_uri, ImageGenerator};
use crate::generation::text_client::SlideTextGenerator;
use crate::generation::types::{ImageStyle, PresentationOutline, SlideSpec};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn slide_spec(image_prompt: &str) -> SlideSpec {
    SlideSpec {
        title: format!("Slide {}", image_prompt),
        content: vec![format!("About {}", image_prompt)],
        speaker_notes: format!("Talk about {}", image_prompt),
        image_prompt: image_prompt.to_string(),
    }
}

pub(crate) fn outline(prompts: &[&str]) -> PresentationOutline {
    PresentationOutline {
        presentation_title: "Test Deck".to_string(),
        slides: prompts.iter().map(|p| slide_spec(p)).collect(),
    }
}

/// Text generator returning a canned outline, or a 503 when none is set
pub(crate) struct FakeTextGenerator {
    outline: Option<PresentationOutline>,
    calls: AtomicUsize,
}

impl FakeTextGenerator {
    pub(crate) fn returning(outline: PresentationOutline) -> Self {
        Self {
            outline: Some(outline),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            outline: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlideTextGenerator for FakeTextGenerator {
    async fn generate(
        &self,
        _topic: &str,
        _api_key: &str,
    ) -> Result<PresentationOutline, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outline.clone().ok_or(GenerationError::Transport {
            service: Service::Text,
            status: 503,
        })
    }
}

/// Image generator with per-prompt delays, failures and panics
#[derive(Default)]
pub(crate) struct FakeImageGenerator {
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    panicking: HashSet<String>,
    calls: AtomicUsize,
    completed: Mutex<Vec<String>>,
}

impl FakeImageGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn uri_for(prompt: &str) -> String {
        png_data_uri(&format!("img-{}", prompt))
    }

    pub(crate) fn delay(mut self, prompt: &str, delay: Duration) -> Self {
        self.delays.insert(prompt.to_string(), delay);
        self
    }

    pub(crate) fn fail_on(mut self, prompt: &str) -> Self {
        self.failing.insert(prompt.to_string());
        self
    }

    pub(crate) fn panic_on(mut self, prompt: &str) -> Self {
        self.panicking.insert(prompt.to_string());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _style: ImageStyle,
        _api_key: &str,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(prompt) {
            tokio::time::sleep(*delay).await;
        }
        if self.panicking.contains(prompt) {
            panic!("image generator crashed on {}", prompt);
        }
        self.completed.lock().unwrap().push(prompt.to_string());
        if self.failing.contains(prompt) {
            return Err(GenerationError::SafetyBlocked(format!("{} blocked", prompt)));
        }
        Ok(Self::uri_for(prompt))
    }
}
