//! Mock text and image models.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vignette_core::ChatMessage;
use vignette_error::{GenerationError, GenerationErrorKind, VignetteResult};
use vignette_interface::{ImageModel, TextModel};

/// Behavior configuration for the mock text model.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer like a cooperative model: a JSON part list for split prompts,
    /// a numbered story for everything else
    Storyteller,
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(GenerationErrorKind),
    /// Return a sequence of responses, then fall back to storytelling
    Sequence(Vec<MockResponse>),
    /// Sleep before answering like a storyteller
    Slow(Duration),
}

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationErrorKind),
}

/// Mock text model recording every conversation it was sent.
pub struct MockTextModel {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

#[allow(dead_code)]
impl MockTextModel {
    pub fn storyteller() -> Self {
        Self::with_behavior(MockBehavior::Storyteller)
    }

    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    pub fn new_slow(delay: Duration) -> Self {
        Self::with_behavior(MockBehavior::Slow(delay))
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times complete() was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The conversation sent on the given call.
    pub fn sent(&self, call: usize) -> Vec<ChatMessage> {
        self.calls.lock().unwrap()[call].clone()
    }

    fn record(&self, messages: &[ChatMessage]) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(messages.to_vec());
        calls.len() - 1
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn complete(&self, messages: &[ChatMessage]) -> VignetteResult<String> {
        let call = self.record(messages);

        match &self.behavior {
            MockBehavior::Storyteller => Ok(storyteller(messages, call)),
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
            MockBehavior::Sequence(responses) => match responses.get(call) {
                Some(MockResponse::Success(text)) => Ok(text.clone()),
                Some(MockResponse::Error(kind)) => Err(GenerationError::new(kind.clone()).into()),
                None => Ok(storyteller(messages, call)),
            },
            MockBehavior::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(storyteller(messages, call))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

fn storyteller(messages: &[ChatMessage], call: usize) -> String {
    let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or_default();

    match requested_parts(prompt) {
        Some(count) => parts_json(count),
        None => format!("Story #{call}: a robot wandered through {} turns.", messages.len()),
    }
}

fn requested_parts(prompt: &str) -> Option<usize> {
    let rest = prompt.split("Split the following story into ").nth(1)?;
    rest.split_whitespace().next()?.parse().ok()
}

/// A well-formed part-list reply with `count` parts.
pub fn parts_json(count: usize) -> String {
    let entries: Vec<String> = (1..=count)
        .map(|n| {
            format!(r#""{n}": {{"title": "Part {n}", "description": "Scene {n} of the robot"}}"#)
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Mock image model handing out numbered URLs.
pub struct MockImageModel {
    delay: Option<Duration>,
    fail_on_call: Option<usize>,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockImageModel {
    pub fn new() -> Self {
        Self {
            delay: None,
            fail_on_call: None,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before every answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail the given call (0-based) with an API error.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    async fn generate_image(&self, prompt: &str) -> VignetteResult<String> {
        let call = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_on_call == Some(call) {
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: 500,
                message: "image backend unavailable".to_string(),
            })
            .into());
        }
        Ok(format!("https://images.test/candidate-{call}.png"))
    }

    fn image_model_name(&self) -> &str {
        "mock-image"
    }
}
