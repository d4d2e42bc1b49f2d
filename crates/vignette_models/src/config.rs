//! Connection settings for an OpenAI-compatible provider.

use std::time::Duration;

/// Public OpenAI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Chat model used for story writing and splitting.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4";
/// Image model used for illustrations.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
/// Fixed illustration resolution.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Sampling temperature for every completion.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for an OpenAI-compatible provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    /// Base URL including the version segment (e.g., "https://api.openai.com/v1")
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Chat completion model
    pub text_model: String,
    /// Image generation model
    pub image_model: String,
    /// Image resolution, `WIDTHxHEIGHT`
    pub image_size: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Duration,
}

impl OpenAiConfig {
    /// Configuration with the default endpoint and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(120),
        }
    }

    /// Point the client at another OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the chat model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the image model and resolution.
    pub fn with_image_model(mut self, model: impl Into<String>, size: impl Into<String>) -> Self {
        self.image_model = model.into();
        self.image_size = size.into();
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
