//! Response contract error types.

/// Ways a model reply can violate the part-list contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContractErrorKind {
    /// Reply is not valid JSON
    #[display("Reply is not valid JSON: {}", _0)]
    Decode(String),
    /// Reply is JSON but not an object
    #[display("Reply must be a JSON object keyed by part number")]
    NotAnObject,
    /// Reply object has no entries
    #[display("Reply contains no parts")]
    Empty,
    /// Key is not a positive integer
    #[display("Part key '{}' is not a positive integer", _0)]
    InvalidKey(String),
    /// Keys are not exactly 1..=n
    #[display("Part keys must run from 1 to {} without gaps", _0)]
    NonSequentialKeys(usize),
    /// A part is missing a string field
    #[display("Part '{}' is missing string field '{}'", key, field)]
    MissingField {
        /// Part key
        key: String,
        /// Name of the missing field
        field: &'static str,
    },
    /// Parsed part count differs from the requested count
    #[display("Expected {} parts, model returned {}", expected, actual)]
    CountMismatch {
        /// Requested count
        expected: usize,
        /// Parsed count
        actual: usize,
    },
}

/// Contract violation with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Contract Error: {} at line {} in {}", kind, line, file)]
pub struct ContractError {
    /// The kind of error that occurred
    pub kind: ContractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContractError {
    /// Create a new contract error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
