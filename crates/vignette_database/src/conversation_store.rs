//! PostgreSQL implementation of ConversationStore.

use crate::connection::{PgPool, with_connection};
use crate::conversions::role_from_column;
use crate::models::{MessageRow, NewMessageRow};
use crate::schema::conversation_messages;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::instrument;
use vignette_core::{ChatMessage, ConversationId, ConversationMessage, Role};
use vignette_error::VignetteResult;
use vignette_interface::ConversationStore;

/// Append-only conversation log in the `conversation_messages` table.
///
/// History is ordered by `created_at`, then by the serial id, so turns
/// written within the same clock tick keep their insertion order.
#[derive(Debug, Clone)]
pub struct PostgresConversationStore {
    pool: PgPool,
}

impl PostgresConversationStore {
    /// Create a store over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full records of one thread, oldest first.
    #[instrument(skip(self))]
    pub async fn messages(
        &self,
        conversation_id: &ConversationId,
    ) -> VignetteResult<Vec<ConversationMessage>> {
        let key = conversation_id.as_str().to_string();

        let rows = with_connection(&self.pool, move |conn| {
            Ok(conversation_messages::table
                .filter(conversation_messages::conversation_id.eq(key))
                .order((
                    conversation_messages::created_at.asc(),
                    conversation_messages::id.asc(),
                ))
                .select(MessageRow::as_select())
                .load(conn)?)
        })
        .await?;

        let messages = rows
            .into_iter()
            .map(|row| -> VignetteResult<ConversationMessage> {
                Ok(ConversationMessage {
                    role: role_from_column(&row.role)?,
                    conversation_id: ConversationId::from(row.conversation_id),
                    content: row.content,
                    created_at: row.created_at,
                })
            })
            .collect::<VignetteResult<Vec<_>>>()?;
        Ok(messages)
    }

    /// Append a turn stamped with an explicit time instead of the database clock.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn append_at(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> VignetteResult<()> {
        self.insert(conversation_id, role, content, Some(created_at))
            .await
    }

    async fn insert(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> VignetteResult<()> {
        let row = NewMessageRow {
            conversation_id: conversation_id.as_str().to_string(),
            role: role.as_ref().to_string(),
            content: content.to_string(),
            created_at,
        };

        with_connection(&self.pool, move |conn| {
            diesel::insert_into(conversation_messages::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for PostgresConversationStore {
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    async fn append(
        &self,
        conversation_id: &ConversationId,
        role: Role,
        content: &str,
    ) -> VignetteResult<()> {
        self.insert(conversation_id, role, content, None).await
    }

    async fn history(&self, conversation_id: &ConversationId) -> VignetteResult<Vec<ChatMessage>> {
        Ok(self
            .messages(conversation_id)
            .await?
            .iter()
            .map(ConversationMessage::to_chat)
            .collect())
    }
}
