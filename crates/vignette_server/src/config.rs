//! Process configuration.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use vignette_error::{ConfigError, VignetteResult};
use vignette_models::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_IMAGE_SIZE, DEFAULT_TEMPERATURE,
    DEFAULT_TEXT_MODEL, OpenAiConfig,
};

/// Settings read once at process start.
///
/// Sources, later ones winning: built-in defaults, an optional
/// `vignette.toml` (or the file given on the command line), then the
/// environment, where every key is spelled in upper case (`OPENAI_API_KEY`).
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection string; in-memory storage when absent
    #[serde(default)]
    pub database_url: Option<String>,
    /// Provider API key (required)
    #[serde(default)]
    pub openai_api_key: String,
    /// Provider base URL
    pub openai_base_url: String,
    /// Text completion model
    pub text_model: String,
    /// Image generation model
    pub image_model: String,
    /// Image resolution
    pub image_size: String,
    /// Sampling temperature for text calls
    pub temperature: f32,
    /// Upper bound on a single provider call, in seconds
    pub request_timeout_secs: u64,
    /// Listen port
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("image_size", &self.image_size)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and process environment.
    ///
    /// `path` replaces the optional `vignette.toml` lookup and must exist.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be read, a value has
    /// the wrong type, or validation fails.
    pub fn load(path: Option<&Path>) -> VignetteResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], reading variables from `env` instead of the
    /// process environment when given.
    #[instrument(skip(env))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> VignetteResult<Self> {
        debug!("Loading configuration: environment > file > defaults");

        let file = match path {
            Some(path) => File::from(path),
            None => File::with_name("vignette").required(false),
        };

        let config: Self = Config::builder()
            .set_default("openai_base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("text_model", DEFAULT_TEXT_MODEL))
            .and_then(|b| b.set_default("image_model", DEFAULT_IMAGE_MODEL))
            .and_then(|b| b.set_default("image_size", DEFAULT_IMAGE_SIZE))
            .and_then(|b| b.set_default("temperature", f64::from(DEFAULT_TEMPERATURE)))
            .and_then(|b| b.set_default("request_timeout_secs", 120_i64))
            .and_then(|b| b.set_default("port", 3000_i64))
            .and_then(|b| b.set_default("log_level", "info"))
            .and_then(|b| b.set_default("log_json", false))
            .map_err(|e| ConfigError::new(format!("Failed to set defaults: {}", e)))?
            .add_source(file)
            .add_source(Environment::default().try_parsing(true).source(env))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot work.
    pub fn validate(&self) -> VignetteResult<()> {
        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::new("OPENAI_API_KEY is not set").into());
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::new("request_timeout_secs must be positive").into());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "temperature {} is outside [0, 2]",
                self.temperature
            ))
            .into());
        }
        if self
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::new("DATABASE_URL is set but empty").into());
        }
        Ok(())
    }

    /// Provider call timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Provider client settings.
    pub fn openai_config(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.openai_api_key.clone())
            .with_base_url(self.openai_base_url.clone())
            .with_text_model(self.text_model.clone())
            .with_image_model(self.image_model.clone(), self.image_size.clone())
            .with_temperature(self.temperature)
            .with_request_timeout(self.request_timeout())
    }
}
