//! Error types for the Vignette workflow.
//!
//! This crate provides the error vocabulary shared by every Vignette crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The categories line up with what callers need to tell apart:
//!
//! | Category | Meaning |
//! |---|---|
//! | [`ValidationError`] | malformed or out-of-range caller input |
//! | [`NotFoundError`] | unknown project or part index |
//! | [`ForbiddenStateError`] | operation invoked before a required lifecycle step |
//! | [`GenerationError`] | the text or image provider failed |
//! | [`ContractError`] | a model reply did not have the expected structured shape |
//! | [`DatabaseError`] | persistence failure |
//! | [`ConfigError`] | invalid or missing configuration |
//!
//! # Examples
//!
//! ```
//! use vignette_error::{VignetteResult, ValidationError, ValidationErrorKind};
//!
//! fn check_name(name: &str) -> VignetteResult<()> {
//!     if name.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyField("name")))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check_name("  ").unwrap_err();
//! assert!(err.is_validation());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod contract;
mod database;
mod error;
mod forbidden;
mod generation;
mod not_found;
mod validation;

pub use config::ConfigError;
pub use contract::{ContractError, ContractErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{VignetteError, VignetteErrorKind, VignetteResult};
pub use forbidden::{ForbiddenStateError, ForbiddenStateErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use not_found::{NotFoundError, NotFoundErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
