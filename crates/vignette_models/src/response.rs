use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    pub id: String,
    /// Model used for completion
    #[serde(default)]
    pub model: String,
    /// Generated completions
    pub choices: Vec<Choice>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
    /// Reason why generation finished
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    pub role: String,
    /// Generated content; providers send `null` for refusals and tool calls
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI-compatible image generation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageGenerationResponse {
    /// Unix timestamp of when the images were created
    #[serde(default)]
    pub created: i64,
    /// Generated images
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageData {
    /// Hosted URL of the image
    #[serde(default)]
    pub url: Option<String>,
    /// Prompt after provider-side rewriting
    #[serde(default)]
    pub revised_prompt: Option<String>,
}
