//! Core domain types for the Vignette illustrated-story workflow.
//!
//! A [`Project`] is a story plus the illustrated parts derived from it. Its
//! narrative context lives in a conversation thread of [`ConversationMessage`]s,
//! referenced (never owned) through the project's [`ConversationId`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ids;
mod message;
mod project;
mod role;
mod view;

pub use ids::{ConversationId, ProjectId};
pub use message::{ChatMessage, ConversationMessage};
pub use project::{Part, PartDraft, Project, ProjectState};
pub use role::Role;
pub use view::{PartView, ProjectView};

/// Largest number of parts a story may be split into.
pub const MAX_PARTS: usize = 10;

/// Number of candidate illustrations produced per part.
pub const IMAGE_CANDIDATES: usize = 3;
