//! Conversation turns.

use crate::{ConversationId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted, append-only conversation turn.
///
/// `created_at` defines the replay order; equal timestamps fall back to
/// insertion order, which every store must preserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Thread this turn belongs to
    pub conversation_id: ConversationId,
    /// Author of the turn
    pub role: Role,
    /// Raw text
    pub content: String,
    /// When the turn was appended
    pub created_at: DateTime<Utc>,
}

impl ConversationMessage {
    /// The role/content pair replayed to the model.
    pub fn to_chat(&self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// One turn as sent to the text model.
///
/// # Examples
///
/// ```
/// use vignette_core::{ChatMessage, Role};
///
/// let msg = ChatMessage::user("Write a story");
/// assert_eq!(msg.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the turn
    pub role: Role,
    /// Raw text
    pub content: String,
}

impl ChatMessage {
    /// A user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// An assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
