//! Caller-facing project representation.

use serde::{Deserialize, Serialize};

/// Project as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    /// Project id
    pub id: String,
    /// Display name
    pub name: String,
    /// Current story text
    pub story: String,
    /// Parts in story order; empty before the first split
    pub parts: Vec<PartView>,
}

/// Part as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartView {
    /// Short title
    pub title: String,
    /// Visual description
    pub description: String,
    /// Selected image URL, `null` until one is chosen
    pub image: Option<String>,
}
