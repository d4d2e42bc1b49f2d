//! Provider capabilities.

use async_trait::async_trait;
use vignette_core::ChatMessage;
use vignette_error::VignetteResult;

/// Text-completion capability of an external provider.
///
/// Stateless: every call carries the full ordered history the model should see.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Produce a single textual completion for the given turns.
    async fn complete(&self, messages: &[ChatMessage]) -> VignetteResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// Image-generation capability of an external provider.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate one image for `prompt` and return its URL.
    async fn generate_image(&self, prompt: &str) -> VignetteResult<String>;

    /// Model identifier (e.g., "dall-e-3").
    fn image_model_name(&self) -> &str;
}
