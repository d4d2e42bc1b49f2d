//! Not-found error types.

/// Referenced entity does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NotFoundErrorKind {
    /// No project with this id
    #[display("Project with id {} not found", _0)]
    Project(String),
    /// Part index outside `[0, part_count)` on a split project
    #[display("Part with index {} not found (project has {} parts)", index, part_count)]
    Part {
        /// Index requested by the caller
        index: usize,
        /// Number of parts the project holds
        part_count: usize,
    },
}

/// Not-found error with location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{NotFoundError, NotFoundErrorKind};
///
/// let err = NotFoundError::new(NotFoundErrorKind::Part { index: 4, part_count: 3 });
/// assert!(format!("{}", err).contains("index 4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: {} at line {} in {}", kind, line, file)]
pub struct NotFoundError {
    /// The kind of error that occurred
    pub kind: NotFoundErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new not-found error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NotFoundErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
