//! Trait definitions for the Vignette workflow.
//!
//! The workflow engine only ever talks to its collaborators through these
//! traits: a text model, an image model, a conversation store and a project
//! repository. Concrete implementations live in `vignette_models`,
//! `vignette_database` and (in-memory) `vignette_workflow`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod models;
mod storage;

pub use models::{ImageModel, TextModel};
pub use storage::{ConversationStore, ProjectRepository};
