use crate::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse, OpenAiConfig, convert,
};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use vignette_core::ChatMessage;
use vignette_error::{ConfigError, GenerationError, GenerationErrorKind, VignetteResult};
use vignette_interface::{ImageModel, TextModel};
use tracing::instrument;

/// Client for an OpenAI-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is blank or the HTTP
    /// client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.text_model))]
    pub fn new(config: OpenAiConfig) -> VignetteResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::new("OpenAI API key must not be empty").into());
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!("Creating OpenAI client");
        Ok(Self { config, client })
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model, turns = request.messages.len()))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> VignetteResult<ChatCompletionResponse> {
        self.post_json("chat/completions", request).await
    }

    /// Send an image generation request
    #[instrument(skip(self, request), fields(model = %request.model, size = %request.size))]
    pub async fn image_generation(
        &self,
        request: &ImageGenerationRequest,
    ) -> VignetteResult<ImageGenerationResponse> {
        self.post_json("images/generations", request).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> VignetteResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url, path);
        tracing::debug!("Sending request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                if e.is_timeout() {
                    GenerationError::new(GenerationErrorKind::Timeout(
                        u64::try_from(self.config.request_timeout.as_millis())
                            .unwrap_or(u64::MAX),
                    ))
                } else {
                    GenerationError::new(GenerationErrorKind::Http(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = convert::api_error_message(&body);
            tracing::error!(status = status.as_u16(), %message, "Provider returned error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed = response.json::<R>().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GenerationError::new(GenerationErrorKind::Deserialization(e.to_string()))
        })?;

        Ok(parsed)
    }
}

#[async_trait]
impl TextModel for OpenAiClient {
    #[instrument(skip(self, messages), fields(turns = messages.len()))]
    async fn complete(&self, messages: &[ChatMessage]) -> VignetteResult<String> {
        let request =
            convert::to_chat_request(messages, &self.config.text_model, self.config.temperature)?;
        let response = self.chat_completion(&request).await?;
        let reply = convert::reply_from_response(response)?;
        tracing::debug!(reply_len = reply.len(), "Chat completion successful");
        Ok(reply)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[async_trait]
impl ImageModel for OpenAiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_image(&self, prompt: &str) -> VignetteResult<String> {
        let request = ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: self.config.image_size.clone(),
        };
        let response = self.image_generation(&request).await?;
        convert::image_url_from_response(response)
    }

    fn image_model_name(&self) -> &str {
        &self.config.image_model
    }
}
