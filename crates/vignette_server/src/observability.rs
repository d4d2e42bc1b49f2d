//! Structured logging setup.

use tracing_subscriber::{
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};
use vignette_error::{ConfigError, VignetteResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. JSON output is meant for
/// production log shipping; the human format includes target, file and line.
///
/// # Errors
///
/// Returns a configuration error for an unparsable filter or if a global
/// subscriber is already installed.
pub fn init_logging(log_level: &str, json: bool) -> VignetteResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter '{}': {}", log_level, e)))?;

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}
