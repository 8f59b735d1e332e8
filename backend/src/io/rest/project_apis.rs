//! # REST API for Projects
//!
//! Endpoints for listing, creating, updating and deleting portfolio projects.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{Project, SaveProjectRequest};
use tracing::info;

use crate::io::rest::auth::Operator;
use crate::io::rest::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    info!("GET /api/projects");
    Ok(Json(state.project_service.list_projects().await?))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    info!("GET /api/projects/{}", id);
    Ok(Json(state.project_service.get_project(&id).await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    _operator: Operator,
    Json(request): Json<SaveProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    info!("POST /api/projects - request: {:?}", request);
    let project = state.project_service.create_project(request).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
    Json(request): Json<SaveProjectRequest>,
) -> ApiResult<Json<Project>> {
    info!("PUT /api/projects/{} - request: {:?}", id, request);
    Ok(Json(state.project_service.update_project(&id, request).await?))
}

pub async fn delete_project(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/projects/{}", id);
    state.project_service.delete_project(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
