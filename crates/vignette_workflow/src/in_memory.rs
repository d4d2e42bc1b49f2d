//! In-memory conversation store and project repository.
//!
//! Used by tests and by the server when no database is configured. All data
//! is lost when the last clone is dropped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use vignette_core::{ChatMessage, ConversationId, ConversationMessage, Project, ProjectId, Role};
use vignette_error::{
    DatabaseError, DatabaseErrorKind, NotFoundError, NotFoundErrorKind, VignetteResult,
};
use vignette_interface::{ConversationStore, ProjectRepository};

/// Conversation turns kept in a map of append-only vectors.
///
/// Every turn carries a global sequence number that breaks timestamp ties,
/// so history always comes back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    threads: Arc<RwLock<HashMap<ConversationId, Vec<(u64, ConversationMessage)>>>>,
    next_sequence: Arc<AtomicU64>,
}

impl InMemoryConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full records of one thread, oldest first (for testing).
    pub async fn messages(&self, conversation_id: &ConversationId) -> Vec<ConversationMessage> {
        let threads = self.threads.read().await;
        threads
            .get(conversation_id)
            .map(|thread| ordered(thread).cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct threads (for testing).
    pub async fn thread_count(&self) -> usize {
        self.threads.read().await.len()
    }

    /// Total number of stored turns across all threads (for testing).
    pub async fn len(&self) -> usize {
        self.threads.read().await.values().map(Vec::len).sum()
    }

    /// True when no turn was ever appended.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append a turn stamped with an explicit time instead of the wall clock.
    pub async fn append_at(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
        created_at: DateTime<Utc>,
    ) {
        let message = ConversationMessage {
            conversation_id: conversation_id.clone(),
            role,
            content: content.to_string(),
            created_at,
        };

        // Sequence is drawn under the write lock so it matches push order.
        let mut threads = self.threads.write().await;
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        threads
            .entry(conversation_id.clone())
            .or_default()
            .push((sequence, message));
    }
}

fn ordered(thread: &[(u64, ConversationMessage)]) -> impl Iterator<Item = &ConversationMessage> {
    let mut sorted: Vec<_> = thread.iter().collect();
    sorted.sort_by_key(|(sequence, message)| (message.created_at, *sequence));
    sorted.into_iter().map(|(_, message)| message)
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
    ) -> VignetteResult<()> {
        self.append_at(conversation_id, role, content, Utc::now())
            .await;
        Ok(())
    }

    async fn history(&self, conversation_id: &ConversationId) -> VignetteResult<Vec<ChatMessage>> {
        let threads = self.threads.read().await;
        Ok(threads
            .get(conversation_id)
            .map(|thread| ordered(thread).map(ConversationMessage::to_chat).collect())
            .unwrap_or_default())
    }
}

/// Projects kept in a map keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects (for testing).
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    /// True when no project is stored.
    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> VignetteResult<()> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(project.id()) {
            return Err(DatabaseError::new(DatabaseErrorKind::Query(format!(
                "Project {} already exists",
                project.id()
            )))
            .into());
        }
        projects.insert(*project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> VignetteResult<Option<Project>> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn save(&self, project: &Project) -> VignetteResult<()> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(project.id()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(NotFoundError::new(NotFoundErrorKind::Project(project.id().to_string())).into()),
        }
    }
}
