//! Test utilities for workflow tests.
//!
//! This module provides mock model implementations and a helper wiring them
//! into a workflow backed by in-memory collaborators.

pub mod mock_models;

#[allow(unused_imports)]
pub use mock_models::{MockBehavior, MockImageModel, MockResponse, MockTextModel, parts_json};

use std::sync::Arc;
use vignette_workflow::{
    InMemoryConversationStore, InMemoryProjectRepository, ModelGateway, ProjectWorkflow,
};

/// A workflow plus handles on every collaborator for inspection.
#[allow(dead_code)]
pub struct Harness {
    pub workflow: ProjectWorkflow,
    pub text: Arc<MockTextModel>,
    pub images: Arc<MockImageModel>,
    pub store: InMemoryConversationStore,
    pub projects: InMemoryProjectRepository,
}

/// Wire mocks into a workflow with in-memory storage.
#[allow(dead_code)]
pub fn harness(text: MockTextModel, images: MockImageModel) -> Harness {
    let text = Arc::new(text);
    let images = Arc::new(images);
    let store = InMemoryConversationStore::new();
    let projects = InMemoryProjectRepository::new();

    let gateway = ModelGateway::new(text.clone(), images.clone(), Arc::new(store.clone()));
    let workflow = ProjectWorkflow::new(gateway, Arc::new(projects.clone()));

    Harness {
        workflow,
        text,
        images,
        store,
        projects,
    }
}
