//! Model gateway: text and image generation threaded through the conversation store.

use crate::{parse_parts_exact, prompts};
use futures::future::try_join_all;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use vignette_core::{ConversationId, PartDraft, Role};
use vignette_error::{GenerationError, GenerationErrorKind, VignetteResult};
use vignette_interface::{ConversationStore, ImageModel, TextModel};

/// Upper bound on a single provider call unless overridden.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(180);

/// Capability wrapper around the text and image providers.
///
/// Built once at process start and shared by reference. Text calls are
/// recorded in the conversation store: the user turn is appended before the
/// history is read, and the assistant turn only after the model answered.
#[derive(Clone)]
pub struct ModelGateway {
    text: Arc<dyn TextModel>,
    images: Arc<dyn ImageModel>,
    store: Arc<dyn ConversationStore>,
    timeout: Duration,
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field("provider", &self.text.provider_name())
            .field("text_model", &self.text.model_name())
            .field("image_model", &self.images.image_model_name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ModelGateway {
    /// Create a gateway with the default provider timeout.
    pub fn new(
        text: Arc<dyn TextModel>,
        images: Arc<dyn ImageModel>,
        store: Arc<dyn ConversationStore>,
    ) -> Self {
        Self {
            text,
            images,
            store,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Bound every provider call by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `prompt` to the text model and return its reply.
    ///
    /// With a conversation id the model sees the whole thread, ending with
    /// `prompt`. Without one, a throwaway id is minted: both turns are still
    /// recorded for auditing, but nothing reads that thread again.
    ///
    /// # Errors
    ///
    /// Store failures, provider failures, timeouts and blank replies. On a
    /// provider failure the user turn stays recorded and no assistant turn is
    /// written.
    #[instrument(
        skip(self, prompt),
        fields(prompt_len = prompt.len(), threaded = conversation_id.is_some())
    )]
    pub async fn generate_text(
        &self,
        prompt: &str,
        conversation_id: Option<&ConversationId>,
    ) -> VignetteResult<String> {
        let conversation_id = conversation_id
            .cloned()
            .unwrap_or_else(ConversationId::generate);

        self.store
            .append(&conversation_id, Role::User, prompt)
            .await?;
        let history = self.store.history(&conversation_id).await?;
        tracing::debug!(
            conversation_id = %conversation_id,
            turns = history.len(),
            model = self.text.model_name(),
            "Sending conversation to text model"
        );

        let reply = self.bounded(self.text.complete(&history)).await?;
        if reply.trim().is_empty() {
            tracing::warn!(conversation_id = %conversation_id, "Text model returned a blank reply");
            return Err(GenerationError::new(GenerationErrorKind::EmptyReply).into());
        }

        self.store
            .append(&conversation_id, Role::Assistant, &reply)
            .await?;
        tracing::debug!(reply_len = reply.len(), "Recorded assistant turn");
        Ok(reply)
    }

    /// Generate a single image and return its URL.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_image(&self, prompt: &str) -> VignetteResult<String> {
        self.bounded(self.images.generate_image(prompt)).await
    }

    /// Issue `count` image calls concurrently and wait for all of them.
    ///
    /// Fails as a whole if any single call fails.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_image_candidates(
        &self,
        prompt: &str,
        count: usize,
    ) -> VignetteResult<Vec<String>> {
        let calls = (0..count).map(|_| self.generate_image(prompt));
        let urls = try_join_all(calls).await?;
        tracing::info!(count = urls.len(), "Generated image candidates");
        Ok(urls)
    }

    /// Ask the text model to partition `story` into `count` labelled parts.
    ///
    /// Stateless: the exchange goes to a throwaway thread. The result is keyed
    /// by part number, starting at 1.
    ///
    /// # Errors
    ///
    /// Generation failures and contract violations, including a part count
    /// other than `count`.
    #[instrument(skip(self, story), fields(story_len = story.len()))]
    pub async fn preview_parts(
        &self,
        story: &str,
        count: usize,
    ) -> VignetteResult<BTreeMap<usize, PartDraft>> {
        let reply = self
            .generate_text(&prompts::split_into_parts(story, count), None)
            .await?;
        let drafts = parse_parts_exact(&reply, count)?;
        Ok((1..).zip(drafts).collect())
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = VignetteResult<T>>,
    ) -> VignetteResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let waited_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::error!(waited_ms, "Provider call timed out");
                Err(GenerationError::new(GenerationErrorKind::Timeout(waited_ms)).into())
            }
        }
    }
}
