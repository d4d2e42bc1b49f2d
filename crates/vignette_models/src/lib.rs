//! OpenAI-compatible provider for Vignette.
//!
//! [`OpenAiClient`] implements both [`vignette_interface::TextModel`] (chat
//! completions) and [`vignette_interface::ImageModel`] (image generations)
//! against any server that speaks the OpenAI REST dialect.
//!
//! # Example
//!
//! ```rust,no_run
//! use vignette_models::{OpenAiClient, OpenAiConfig};
//! use vignette_interface::TextModel;
//! use vignette_core::ChatMessage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(OpenAiConfig::new("sk-..."))?;
//! let reply = client.complete(&[ChatMessage::user("Write a haiku")]).await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod request;
mod response;

pub use client::OpenAiClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_IMAGE_SIZE, DEFAULT_TEMPERATURE,
    DEFAULT_TEXT_MODEL, OpenAiConfig,
};
pub use convert::{api_error_message, image_url_from_response, reply_from_response, to_chat_request};
pub use request::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ImageGenerationRequest, WireMessage,
};
pub use response::{
    ChatCompletionResponse, Choice, ChoiceMessage, ImageData, ImageGenerationResponse,
};
