//! Validation error types.

/// Malformed or out-of-range caller input.
///
/// Always detected before any external call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required string field was empty or whitespace
    #[display("Field '{}' must not be empty", _0)]
    EmptyField(&'static str),
    /// Requested part count outside `[1, max]`
    #[display("Invalid count {}, must be between 1 and {}", count, max)]
    PartCountOutOfRange {
        /// Count supplied by the caller
        count: i64,
        /// Upper bound (inclusive)
        max: usize,
    },
    /// Image reference is not a valid http(s) URL
    #[display("Invalid image URL: {}", _0)]
    InvalidUrl(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::PartCountOutOfRange { count: 0, max: 10 });
/// assert!(format!("{}", err).contains("between 1 and 10"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
