//! Test utilities for server tests.
//!
//! Mock providers and a helper that serves the API on an ephemeral port.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vignette_core::ChatMessage;
use vignette_error::{GenerationError, GenerationErrorKind, VignetteResult};
use vignette_interface::{ImageModel, TextModel};
use vignette_server::{AppState, router};
use vignette_workflow::{
    InMemoryConversationStore, InMemoryProjectRepository, ModelGateway, ProjectWorkflow,
};

/// Text model answering split prompts with a valid part list and anything
/// else with a short story. Fails every call when `broken`.
pub struct MockTextModel {
    broken: bool,
    calls: AtomicUsize,
}

impl MockTextModel {
    pub fn new() -> Self {
        Self {
            broken: false,
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn broken() -> Self {
        Self {
            broken: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn complete(&self, messages: &[ChatMessage]) -> VignetteResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
            .into());
        }

        let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or_default();
        let requested = prompt
            .split("Split the following story into ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|count| count.parse::<usize>().ok());

        Ok(match requested {
            Some(count) => {
                let entries: Vec<String> = (1..=count)
                    .map(|n| {
                        format!(r#""{n}": {{"title": "Part {n}", "description": "Scene {n}"}}"#)
                    })
                    .collect();
                format!("```json\n{{{}}}\n```", entries.join(", "))
            }
            None => format!("Story {call}: the robot kept walking."),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// Image model handing out numbered URLs.
pub struct MockImageModel {
    calls: AtomicUsize,
}

impl MockImageModel {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    async fn generate_image(&self, _prompt: &str) -> VignetteResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("https://images.test/{call}.png"))
    }

    fn image_model_name(&self) -> &str {
        "mock-image"
    }
}

/// Serve the API on 127.0.0.1:0 and return its base URL.
pub async fn start_server(text: MockTextModel) -> String {
    let gateway = ModelGateway::new(
        Arc::new(text),
        Arc::new(MockImageModel::new()),
        Arc::new(InMemoryConversationStore::new()),
    );
    let workflow = ProjectWorkflow::new(gateway, Arc::new(InMemoryProjectRepository::new()));
    let app = router(AppState::new(workflow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
