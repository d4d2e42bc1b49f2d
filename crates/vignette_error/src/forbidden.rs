//! Forbidden-state error types.

/// Operation attempted before a required lifecycle step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ForbiddenStateErrorKind {
    /// Image operations need a project that has been split into parts
    #[display("Project {} was not split into parts", _0)]
    NotSplit(String),
}

/// Forbidden-state error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Forbidden: {} at line {} in {}", kind, line, file)]
pub struct ForbiddenStateError {
    /// The kind of error that occurred
    pub kind: ForbiddenStateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ForbiddenStateError {
    /// Create a new forbidden-state error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ForbiddenStateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
