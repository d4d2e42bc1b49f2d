//! Generation workflow engine for Vignette.
//!
//! This crate orchestrates the multi-step, model-driven life of a project:
//! a premise becomes a story, the story is split into illustrated parts, and
//! candidate illustrations are generated and selected per part.
//!
//! # Components
//!
//! - **Prompt templates** ([`prompts`]): pure functions building every prompt
//! - **Response contract parser** ([`parse_parts`]): turns a model reply into part drafts
//! - **Model gateway** ([`ModelGateway`]): threads text calls through the conversation store
//! - **Workflow engine** ([`ProjectWorkflow`]): the project state machine
//! - **In-memory collaborators**: store and repository for tests and database-less runs
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vignette_workflow::{InMemoryConversationStore, InMemoryProjectRepository, ModelGateway, ProjectWorkflow};
//!
//! let client = Arc::new(OpenAiClient::new(OpenAiConfig::new(key))?);
//! let gateway = ModelGateway::new(client.clone(), client, Arc::new(InMemoryConversationStore::new()));
//! let workflow = ProjectWorkflow::new(gateway, Arc::new(InMemoryProjectRepository::new()));
//!
//! let project = workflow.create_project("Robots", "a lonely robot").await?;
//! let project = workflow.split_into_parts(project.id(), 3).await?;
//! let urls = workflow.generate_images(project.id(), 0).await?;
//! workflow.select_image(project.id(), 0, &urls[1]).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contract;
mod engine;
mod gateway;
mod in_memory;
mod locks;
pub mod prompts;

pub use contract::{parse_parts, parse_parts_exact};
pub use engine::ProjectWorkflow;
pub use gateway::{DEFAULT_PROVIDER_TIMEOUT, ModelGateway};
pub use in_memory::{InMemoryConversationStore, InMemoryProjectRepository};
pub use locks::ProjectLocks;
