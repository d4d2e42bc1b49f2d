//! Conversions between domain types and database rows.

use crate::models::{NewProjectRow, ProjectChangeset, ProjectRow};
use chrono::Utc;
use vignette_core::{ConversationId, Part, Project, ProjectId, Role};
use vignette_error::{DatabaseError, DatabaseErrorKind};

use crate::DatabaseResult;

pub(crate) fn project_to_new_row(project: &Project) -> DatabaseResult<NewProjectRow> {
    Ok(NewProjectRow {
        id: *project.id().as_uuid(),
        name: project.name().clone(),
        conversation_id: project.conversation_id().as_str().to_string(),
        story: project.story().clone(),
        part_count: part_count_column(project)?,
        parts: serde_json::to_value(project.parts())?,
    })
}

pub(crate) fn project_to_changeset(project: &Project) -> DatabaseResult<ProjectChangeset> {
    Ok(ProjectChangeset {
        story: project.story().clone(),
        part_count: part_count_column(project)?,
        parts: serde_json::to_value(project.parts())?,
        updated_at: Utc::now(),
    })
}

/// Rebuild a project, refusing rows whose cached count disagrees with the parts.
pub(crate) fn row_to_project(row: ProjectRow) -> DatabaseResult<Project> {
    let parts: Vec<Part> = serde_json::from_value(row.parts)?;

    let stored_count = row.part_count.unwrap_or(0);
    if usize::try_from(stored_count).ok() != Some(parts.len()) {
        return Err(DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "Project {} stores part_count {:?} but {} parts",
            row.id,
            row.part_count,
            parts.len()
        ))));
    }

    Ok(Project::restore(
        ProjectId::from(row.id),
        row.name,
        ConversationId::from(row.conversation_id),
        row.story,
        parts,
    ))
}

pub(crate) fn role_from_column(raw: &str) -> DatabaseResult<Role> {
    raw.parse().map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "Unknown conversation role '{raw}'"
        )))
    })
}

fn part_count_column(project: &Project) -> DatabaseResult<Option<i32>> {
    project
        .part_count()
        .map(i32::try_from)
        .transpose()
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e.to_string())))
}
