//! Projects and their illustrated parts.

use crate::{ConversationId, PartView, ProjectId, ProjectView};
use serde::{Deserialize, Serialize};
use vignette_error::{
    ForbiddenStateError, ForbiddenStateErrorKind, NotFoundError, NotFoundErrorKind, VignetteResult,
};

/// Lifecycle position of a project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum ProjectState {
    /// No story yet
    New,
    /// Story present, not split
    Storied,
    /// Parts present, zero or more images selected
    Split,
}

/// Title and visual description produced by the split operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartDraft {
    /// Short title
    pub title: String,
    /// Visual description used as the image prompt
    pub description: String,
}

/// One narrative segment of a split story.
///
/// `image_url` starts out empty and is only ever overwritten by a later
/// selection, never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Part {
    title: String,
    description: String,
    image_url: Option<String>,
}

impl From<PartDraft> for Part {
    fn from(draft: PartDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            image_url: None,
        }
    }
}

/// The persisted unit of work: a story plus its derived parts.
///
/// `parts` and `part_count` change together: both are unset before the first
/// split and consistent afterwards.
///
/// # Examples
///
/// ```
/// use vignette_core::{ConversationId, PartDraft, Project, ProjectState};
///
/// let mut project = Project::new("Robots", ConversationId::generate(), "Once upon a time");
/// assert_eq!(project.state(), ProjectState::Storied);
///
/// project.replace_parts(vec![PartDraft {
///     title: "Beginning".to_string(),
///     description: "A robot alone in a field".to_string(),
/// }]);
/// assert_eq!(project.state(), ProjectState::Split);
/// assert_eq!(project.part_count(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Project {
    id: ProjectId,
    name: String,
    conversation_id: ConversationId,
    story: String,
    parts: Vec<Part>,
    #[getter(skip)]
    part_count: Option<usize>,
}

impl Project {
    /// Create a freshly storied project with a new id.
    pub fn new(
        name: impl Into<String>,
        conversation_id: ConversationId,
        story: impl Into<String>,
    ) -> Self {
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            conversation_id,
            story: story.into(),
            parts: Vec::new(),
            part_count: None,
        }
    }

    /// Rebuild a project from persisted fields.
    ///
    /// The part count is derived from `parts`, so a restored project always
    /// satisfies the parts/count invariant.
    pub fn restore(
        id: ProjectId,
        name: String,
        conversation_id: ConversationId,
        story: String,
        parts: Vec<Part>,
    ) -> Self {
        let part_count = (!parts.is_empty()).then_some(parts.len());
        Self {
            id,
            name,
            conversation_id,
            story,
            parts,
            part_count,
        }
    }

    /// Cached number of parts; `None` before the first split.
    pub fn part_count(&self) -> Option<usize> {
        self.part_count
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProjectState {
        if self.is_split() {
            ProjectState::Split
        } else if self.story.is_empty() {
            ProjectState::New
        } else {
            ProjectState::Storied
        }
    }

    /// True once parts exist.
    pub fn is_split(&self) -> bool {
        self.part_count.is_some_and(|count| count > 0) && !self.parts.is_empty()
    }

    /// Overwrite the story. Identity, name and conversation are untouched.
    pub fn set_story(&mut self, story: impl Into<String>) {
        self.story = story.into();
    }

    /// Replace the part list wholesale, resetting every selected image.
    pub fn replace_parts(&mut self, drafts: Vec<PartDraft>) {
        self.parts = drafts.into_iter().map(Part::from).collect();
        self.part_count = (!self.parts.is_empty()).then_some(self.parts.len());
    }

    /// Check that `index` addresses a part of a split project.
    ///
    /// # Errors
    ///
    /// - forbidden-state if the project has not been split
    /// - not-found if `index` is outside `[0, part_count)`
    #[track_caller]
    pub fn require_part(&self, index: usize) -> VignetteResult<&Part> {
        let part_count = match self.part_count {
            Some(count) if self.is_split() => count,
            _ => {
                return Err(ForbiddenStateError::new(ForbiddenStateErrorKind::NotSplit(
                    self.id.to_string(),
                ))
                .into());
            }
        };

        if index >= part_count {
            return Err(NotFoundError::new(NotFoundErrorKind::Part { index, part_count }).into());
        }

        self.parts
            .get(index)
            .ok_or_else(|| NotFoundError::new(NotFoundErrorKind::Part { index, part_count }).into())
    }

    /// Record the chosen illustration for a part.
    ///
    /// Re-selecting overwrites the previous choice; selecting the same URL
    /// twice leaves the project unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Project::require_part`].
    #[track_caller]
    pub fn select_image(&mut self, index: usize, url: impl Into<String>) -> VignetteResult<()> {
        self.require_part(index)?;
        if let Some(part) = self.parts.get_mut(index) {
            part.image_url = Some(url.into());
        }
        Ok(())
    }

    /// Caller-facing representation.
    pub fn view(&self) -> ProjectView {
        ProjectView {
            id: self.id.to_string(),
            name: self.name.clone(),
            story: self.story.clone(),
            parts: self
                .parts
                .iter()
                .map(|part| PartView {
                    title: part.title.clone(),
                    description: part.description.clone(),
                    image: part.image_url.clone(),
                })
                .collect(),
        }
    }
}
