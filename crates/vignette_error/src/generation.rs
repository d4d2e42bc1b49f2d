//! Upstream generation error types.

/// Failures reported by (or while talking to) the text and image providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("Provider returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
    /// Text completion contained no usable content
    #[display("Model returned an empty reply")]
    EmptyReply,
    /// Image response did not carry a URL
    #[display("Image response did not contain a URL")]
    MissingImage,
    /// Provider did not answer in time (milliseconds waited)
    #[display("Provider call timed out after {} ms", _0)]
    Timeout(u64),
}

/// Generation error with location tracking.
///
/// Never retried by the workflow; surfaced to the caller as-is.
///
/// # Examples
///
/// ```
/// use vignette_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout(1500));
/// assert!(format!("{}", err).contains("1500 ms"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
