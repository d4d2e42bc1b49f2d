//! Conversion between Vignette and OpenAI wire types

use crate::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ImageGenerationResponse, WireMessage,
};
use vignette_core::ChatMessage;
use vignette_error::{GenerationError, GenerationErrorKind, VignetteResult};

/// Build a chat completion request from ordered conversation turns.
#[tracing::instrument(skip(messages), fields(turns = messages.len()))]
pub fn to_chat_request(
    messages: &[ChatMessage],
    model: &str,
    temperature: f32,
) -> VignetteResult<ChatCompletionRequest> {
    let messages = messages
        .iter()
        .map(|m| WireMessage {
            role: m.role.to_string(),
            content: m.content.clone(),
        })
        .collect::<Vec<_>>();

    ChatCompletionRequestBuilder::default()
        .model(model)
        .messages(messages)
        .temperature(Some(temperature))
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::Deserialization(format!(
                "Failed to build request: {}",
                e
            )))
            .into()
        })
}

/// Extract the single textual completion from a chat response.
///
/// # Errors
///
/// Returns `EmptyReply` when there is no choice or the content is blank.
pub fn reply_from_response(response: ChatCompletionResponse) -> VignetteResult<String> {
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyReply))?;

    Ok(text)
}

/// Extract the URL of the first generated image.
pub fn image_url_from_response(response: ImageGenerationResponse) -> VignetteResult<String> {
    let url = response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingImage))?;

    Ok(url)
}

/// Pull a readable message out of an error body.
///
/// OpenAI wraps failures as `{"error": {"message": ...}}`; anything else is
/// returned verbatim.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
