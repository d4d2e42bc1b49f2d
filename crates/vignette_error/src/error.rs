//! Top-level error wrapper types.

use crate::{
    ConfigError, ContractError, DatabaseError, ForbiddenStateError, GenerationError,
    NotFoundError, ValidationError,
};

/// Every error category a Vignette operation can produce.
///
/// # Examples
///
/// ```
/// use vignette_error::{VignetteError, ConfigError};
///
/// let err: VignetteError = ConfigError::new("missing key").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VignetteErrorKind {
    /// Caller input rejected
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Unknown project or part
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Lifecycle step missing
    #[from(ForbiddenStateError)]
    Forbidden(ForbiddenStateError),
    /// Provider failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Malformed structured reply
    #[from(ContractError)]
    Contract(ContractError),
    /// Persistence failure
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Vignette error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vignette Error: {}", _0)]
pub struct VignetteError(Box<VignetteErrorKind>);

impl VignetteError {
    /// Create a new error from a kind.
    pub fn new(kind: VignetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VignetteErrorKind {
        &self.0
    }

    /// True for rejected caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), VignetteErrorKind::Validation(_))
    }

    /// True for unknown projects and out-of-range part indices.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), VignetteErrorKind::NotFound(_))
    }

    /// True for operations attempted before a required lifecycle step.
    pub fn is_forbidden(&self) -> bool {
        matches!(self.kind(), VignetteErrorKind::Forbidden(_))
    }

    /// True for provider failures and malformed model replies.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.kind(),
            VignetteErrorKind::Generation(_) | VignetteErrorKind::Contract(_)
        )
    }
}

// Generic From implementation for any type that converts to VignetteErrorKind
impl<T> From<T> for VignetteError
where
    T: Into<VignetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vignette operations.
///
/// # Examples
///
/// ```
/// use vignette_error::{VignetteResult, NotFoundError, NotFoundErrorKind};
///
/// fn lookup() -> VignetteResult<String> {
///     Err(NotFoundError::new(NotFoundErrorKind::Project("abc".to_string())))?
/// }
///
/// assert!(lookup().unwrap_err().is_not_found());
/// ```
pub type VignetteResult<T> = std::result::Result<T, VignetteError>;
