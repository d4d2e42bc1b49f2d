//! PostgreSQL implementation of ProjectRepository.

use crate::connection::{PgPool, with_connection};
use crate::conversions::{project_to_changeset, project_to_new_row, row_to_project};
use crate::models::ProjectRow;
use crate::schema::projects;
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::{debug, instrument};
use vignette_core::{Project, ProjectId};
use vignette_error::{NotFoundError, NotFoundErrorKind, VignetteResult};
use vignette_interface::ProjectRepository;

/// Projects stored one row per project, with parts embedded as JSONB.
///
/// Saves overwrite the story and parts columns only; id, name and
/// conversation id are written once at creation.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Create a repository over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    #[instrument(skip(self, project), fields(project_id = %project.id()))]
    async fn create(&self, project: &Project) -> VignetteResult<()> {
        let row = project_to_new_row(project)?;

        with_connection(&self.pool, move |conn| {
            diesel::insert_into(projects::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await?;

        debug!("Inserted project");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &ProjectId) -> VignetteResult<Option<Project>> {
        let uuid = *id.as_uuid();

        let row = with_connection(&self.pool, move |conn| {
            Ok(projects::table
                .find(uuid)
                .select(ProjectRow::as_select())
                .first(conn)
                .optional()?)
        })
        .await?;

        Ok(row.map(row_to_project).transpose()?)
    }

    #[instrument(skip(self, project), fields(project_id = %project.id()))]
    async fn save(&self, project: &Project) -> VignetteResult<()> {
        let uuid = *project.id().as_uuid();
        let changes = project_to_changeset(project)?;

        let updated = with_connection(&self.pool, move |conn| {
            Ok(diesel::update(projects::table.find(uuid))
                .set(&changes)
                .execute(conn)?)
        })
        .await?;

        if updated == 0 {
            return Err(NotFoundError::new(NotFoundErrorKind::Project(project.id().to_string())).into());
        }
        debug!(part_count = ?project.part_count(), "Saved project");
        Ok(())
    }
}
