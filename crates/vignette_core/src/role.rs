//! Conversation participant roles.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
///
/// Determines how the turn is replayed into the next model call. Stored and
/// sent on the wire as lowercase text.
///
/// # Examples
///
/// ```
/// use vignette_core::Role;
///
/// assert_eq!(Role::User.to_string(), "user");
/// assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
/// assert!("system".parse::<Role>().is_err());
/// ```
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
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Prompt sent by the workflow
    User,
    /// Completion returned by the model
    Assistant,
}
