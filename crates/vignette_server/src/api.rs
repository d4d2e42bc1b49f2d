//! JSON API over the workflow engine.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::num::IntErrorKind;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;
use vignette_core::{ProjectId, ProjectView};
use vignette_error::{VignetteError, VignetteErrorKind};
use vignette_workflow::ProjectWorkflow;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    workflow: ProjectWorkflow,
}

impl AppState {
    /// Wrap a workflow engine.
    pub fn new(workflow: ProjectWorkflow) -> Self {
        Self { workflow }
    }
}

/// Body of `POST /project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Story premise
    pub prompt: String,
}

/// Body of `PATCH /project/:project_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStoryRequest {
    /// Revision instructions
    pub prompt: String,
}

/// Body of `POST /project/:project_id/parts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Number of parts
    pub count: i64,
}

/// Body of `POST /project/:project_id/parts/:index/image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectImageRequest {
    /// Chosen illustration
    pub url: String,
}

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/project", post(create_project))
        .route("/project/:project_id", get(get_project).patch(update_story))
        .route("/project/:project_id/parts", post(split_into_parts))
        .route("/project/:project_id/parts/:index/images", post(generate_images))
        .route("/project/:project_id/parts/:index/image", post(select_image))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error response: `{"error": kind, "message": text}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "validation",
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "not_found",
            message: message.into(),
        }
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<VignetteError> for ApiError {
    fn from(err: VignetteError) -> Self {
        let (status, error, message) = match err.kind() {
            VignetteErrorKind::Validation(e) => {
                (StatusCode::BAD_REQUEST, "validation", e.kind.to_string())
            }
            VignetteErrorKind::NotFound(e) => (StatusCode::NOT_FOUND, "not_found", e.kind.to_string()),
            VignetteErrorKind::Forbidden(e) => (StatusCode::FORBIDDEN, "forbidden", e.kind.to_string()),
            VignetteErrorKind::Generation(e) => {
                (StatusCode::BAD_GATEWAY, "generation", e.kind.to_string())
            }
            VignetteErrorKind::Contract(e) => (StatusCode::BAD_GATEWAY, "contract", e.kind.to_string()),
            VignetteErrorKind::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database",
                "Internal storage error".to_string(),
            ),
            VignetteErrorKind::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "config",
                "Server misconfigured".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(error = %err, status = status.as_u16(), "Request failed");
        }

        Self {
            status,
            error,
            message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.error, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

fn parse_project_id(raw: &str) -> ApiResult<ProjectId> {
    Ok(ProjectId::parse(raw)?)
}

/// Negative indices can never address a part, so they are not-found rather
/// than malformed; anything that is not an integer is rejected as input.
fn parse_index(raw: &str) -> ApiResult<usize> {
    let not_found = || ApiError::not_found(format!("Part with index {} not found", raw));
    match raw.parse::<i64>() {
        Ok(index) => usize::try_from(index).map_err(|_| not_found()),
        // Integers beyond i64 can never address a part
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(not_found())
        }
        Err(_) => Err(ApiError::bad_request(format!(
            "Part index '{}' is not an integer",
            raw
        ))),
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectView>)> {
    let Json(body) = body?;
    let project = state.workflow.create_project(&body.name, &body.prompt).await?;
    Ok((StatusCode::CREATED, Json(project.view())))
}

async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectView>> {
    let id = parse_project_id(&project_id)?;
    Ok(Json(state.workflow.get_project(&id).await?.view()))
}

async fn update_story(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<Json<UpdateStoryRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectView>> {
    let Json(body) = body?;
    let id = parse_project_id(&project_id)?;
    Ok(Json(state.workflow.update_story(&id, &body.prompt).await?.view()))
}

async fn split_into_parts(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<Json<SplitRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectView>> {
    let Json(body) = body?;
    let id = parse_project_id(&project_id)?;
    Ok(Json(state.workflow.split_into_parts(&id, body.count).await?.view()))
}

async fn generate_images(
    State(state): State<AppState>,
    Path((project_id, index)): Path<(String, String)>,
) -> ApiResult<Json<Vec<String>>> {
    let id = parse_project_id(&project_id)?;
    let index = parse_index(&index)?;
    Ok(Json(state.workflow.generate_images(&id, index).await?))
}

async fn select_image(
    State(state): State<AppState>,
    Path((project_id, index)): Path<(String, String)>,
    body: Result<Json<SelectImageRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectView>> {
    let Json(body) = body?;
    let id = parse_project_id(&project_id)?;
    let index = parse_index(&index)?;
    Ok(Json(
        state.workflow.select_image(&id, index, &body.url).await?.view(),
    ))
}
