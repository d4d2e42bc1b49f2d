use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<WireMessage>,
    /// Temperature for sampling (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub temperature: Option<f32>,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WireMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

/// OpenAI-compatible image generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageGenerationRequest {
    /// Model identifier
    pub model: String,
    /// Text description of the image
    pub prompt: String,
    /// Number of images (always 1)
    pub n: u32,
    /// Resolution, `WIDTHxHEIGHT`
    pub size: String,
}
