//! Opaque identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vignette_error::{NotFoundError, NotFoundErrorKind, VignetteResult};

/// Unique project identity, assigned at creation and never changed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a caller-supplied id.
    ///
    /// An id that cannot possibly exist is reported as not-found rather than as
    /// malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use vignette_core::ProjectId;
    ///
    /// let id = ProjectId::generate();
    /// assert_eq!(ProjectId::parse(&id.to_string()).unwrap(), id);
    /// assert!(ProjectId::parse("not-an-id").unwrap_err().is_not_found());
    /// ```
    #[track_caller]
    pub fn parse(raw: &str) -> VignetteResult<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| NotFoundError::new(NotFoundErrorKind::Project(raw.to_string())).into())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Key of a conversation thread.
///
/// Binds a project to exactly one thread; stateless model calls get a
/// throwaway id that is never looked up again.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
