//! HTTP server for the Vignette illustrated-story workflow.
//!
//! Exposes the workflow engine as a small JSON API, loads configuration once
//! at startup and wires the OpenAI provider with either PostgreSQL or
//! in-memory storage.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;
mod wiring;

pub use api::{
    ApiError, AppState, CreateProjectRequest, SelectImageRequest, SplitRequest,
    UpdateStoryRequest, router,
};
pub use config::AppConfig;
pub use observability::init_logging;
pub use wiring::build_workflow;
