//! Persistence seams.

use async_trait::async_trait;
use vignette_core::{ChatMessage, ConversationId, Project, ProjectId, Role};
use vignette_error::VignetteResult;

/// Append-only log of role-tagged turns keyed by conversation id.
///
/// Messages are never mutated or deleted.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Append a turn to the thread.
    async fn append(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
    ) -> VignetteResult<()>;

    /// Ordered history of the thread, oldest first.
    ///
    /// Turns with equal timestamps come back in insertion order. An unknown
    /// id yields an empty history.
    async fn history(&self, conversation_id: &ConversationId) -> VignetteResult<Vec<ChatMessage>>;
}

/// Document-style persistence of projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a new project.
    async fn create(&self, project: &Project) -> VignetteResult<()>;

    /// Load a project, `None` if the id is unknown.
    async fn find_by_id(&self, id: &ProjectId) -> VignetteResult<Option<Project>>;

    /// Overwrite the mutable state (story and parts) of an existing project.
    async fn save(&self, project: &Project) -> VignetteResult<()>;
}
