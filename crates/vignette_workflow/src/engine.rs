//! The project state machine.

use crate::{ModelGateway, ProjectLocks, prompts};
use std::sync::Arc;
use tracing::instrument;
use url::Url;
use vignette_core::{ConversationId, IMAGE_CANDIDATES, MAX_PARTS, Project, ProjectId};
use vignette_error::{
    NotFoundError, NotFoundErrorKind, ValidationError, ValidationErrorKind, VignetteResult,
};
use vignette_interface::ProjectRepository;

/// Owns the lifecycle of projects: `New` → `Storied` → `Split`.
///
/// Story creation and revision are threaded through the project's
/// conversation so the model keeps narrative continuity; splitting is a
/// stateless one-off call that never touches that thread. A project is only
/// written after every model call it depends on has succeeded and parsed.
///
/// Read-modify-write operations on one project are serialized by a
/// process-local [`ProjectLocks`] table.
#[derive(Clone)]
pub struct ProjectWorkflow {
    gateway: ModelGateway,
    projects: Arc<dyn ProjectRepository>,
    locks: ProjectLocks,
}

impl std::fmt::Debug for ProjectWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectWorkflow")
            .field("gateway", &self.gateway)
            .field("locked_projects", &self.locks.len())
            .finish_non_exhaustive()
    }
}

impl ProjectWorkflow {
    /// Create an engine over the given gateway and repository.
    pub fn new(gateway: ModelGateway, projects: Arc<dyn ProjectRepository>) -> Self {
        Self {
            gateway,
            projects,
            locks: ProjectLocks::new(),
        }
    }

    /// Start a project: write a story from `premise` in a fresh conversation.
    ///
    /// # Errors
    ///
    /// Validation error if `name` or `premise` is blank; generation errors
    /// from the text model; persistence errors.
    #[instrument(skip(self, premise), fields(premise_len = premise.len()))]
    pub async fn create_project(&self, name: &str, premise: &str) -> VignetteResult<Project> {
        require_text("name", name)?;
        require_text("prompt", premise)?;

        let conversation_id = ConversationId::generate();
        let story = self
            .gateway
            .generate_text(&prompts::write_story(premise), Some(&conversation_id))
            .await?;

        let project = Project::new(name, conversation_id, story);
        self.projects.create(&project).await?;
        tracing::info!(project_id = %project.id(), state = %project.state(), "Created project");
        Ok(project)
    }

    /// Fetch a project.
    ///
    /// # Errors
    ///
    /// Not-found if the id is unknown.
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: &ProjectId) -> VignetteResult<Project> {
        self.load(id).await
    }

    /// Revise the story within the project's existing conversation.
    ///
    /// Identity, name and conversation id are preserved; existing parts are
    /// left as they are.
    #[instrument(skip(self, premise), fields(premise_len = premise.len()))]
    pub async fn update_story(&self, id: &ProjectId, premise: &str) -> VignetteResult<Project> {
        require_text("prompt", premise)?;

        let _guard = self.locks.acquire(id).await;
        let mut project = self.load(id).await?;

        let story = self
            .gateway
            .generate_text(&prompts::update_story(premise), Some(project.conversation_id()))
            .await?;

        project.set_story(story);
        self.projects.save(&project).await?;
        tracing::info!(project_id = %id, "Updated story");
        Ok(project)
    }

    /// Split the current story into `count` parts, replacing any earlier parts.
    ///
    /// # Errors
    ///
    /// Validation error if `count` is outside `[1, MAX_PARTS]` (checked before
    /// any lookup or model call); not-found; generation and contract errors,
    /// in which case the project is left unchanged.
    #[instrument(skip(self))]
    pub async fn split_into_parts(&self, id: &ProjectId, count: i64) -> VignetteResult<Project> {
        let count = validate_part_count(count)?;

        let _guard = self.locks.acquire(id).await;
        let mut project = self.load(id).await?;

        let drafts = self
            .gateway
            .preview_parts(project.story(), count)
            .await?
            .into_values()
            .collect();

        project.replace_parts(drafts);
        self.projects.save(&project).await?;
        tracing::info!(project_id = %id, part_count = count, "Split story into parts");
        Ok(project)
    }

    /// Generate candidate illustrations for one part. Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Not-found for an unknown project or out-of-range index; forbidden-state
    /// if the project has not been split; generation errors if any single
    /// image call fails.
    #[instrument(skip(self))]
    pub async fn generate_images(&self, id: &ProjectId, index: usize) -> VignetteResult<Vec<String>> {
        let project = self.load(id).await?;
        let prompt = prompts::illustrate_part(project.require_part(index)?.description());

        self.gateway
            .generate_image_candidates(&prompt, IMAGE_CANDIDATES)
            .await
    }

    /// Record the chosen illustration for one part.
    ///
    /// # Errors
    ///
    /// Validation error for a malformed URL (checked first); otherwise as
    /// [`ProjectWorkflow::generate_images`].
    #[instrument(skip(self))]
    pub async fn select_image(
        &self,
        id: &ProjectId,
        index: usize,
        url: &str,
    ) -> VignetteResult<Project> {
        let url = validate_image_url(url)?;

        let _guard = self.locks.acquire(id).await;
        let mut project = self.load(id).await?;

        project.select_image(index, url)?;
        self.projects.save(&project).await?;
        tracing::info!(project_id = %id, index, "Selected image");
        Ok(project)
    }

    async fn load(&self, id: &ProjectId) -> VignetteResult<Project> {
        self.projects.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(project_id = %id, "Project not found");
            NotFoundError::new(NotFoundErrorKind::Project(id.to_string())).into()
        })
    }
}

#[track_caller]
fn require_text(field: &'static str, value: &str) -> VignetteResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyField(field)).into());
    }
    Ok(())
}

#[track_caller]
fn validate_part_count(count: i64) -> VignetteResult<usize> {
    usize::try_from(count)
        .ok()
        .filter(|count| (1..=MAX_PARTS).contains(count))
        .ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::PartCountOutOfRange {
                count,
                max: MAX_PARTS,
            })
            .into()
        })
}

/// Accept only absolute http(s) URLs with a host.
#[track_caller]
fn validate_image_url(raw: &str) -> VignetteResult<String> {
    let invalid = || ValidationError::new(ValidationErrorKind::InvalidUrl(raw.to_string()));

    let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid().into());
    }
    Ok(raw.trim().to_string())
}
