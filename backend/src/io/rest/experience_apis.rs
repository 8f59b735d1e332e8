//! # REST API for Experience

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{Experience, SaveExperienceRequest};
use tracing::info;

use crate::io::rest::auth::Operator;
use crate::io::rest::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/experience", get(list_experience).post(create_experience))
        .route(
            "/experience/:id",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
}

pub async fn list_experience(State(state): State<AppState>) -> ApiResult<Json<Vec<Experience>>> {
    info!("GET /api/experience");
    Ok(Json(state.experience_service.list_experience().await?))
}

pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Experience>> {
    info!("GET /api/experience/{}", id);
    Ok(Json(state.experience_service.get_experience(&id).await?))
}

pub async fn create_experience(
    State(state): State<AppState>,
    _operator: Operator,
    Json(request): Json<SaveExperienceRequest>,
) -> ApiResult<(StatusCode, Json<Experience>)> {
    info!("POST /api/experience - request: {:?}", request);
    let entry = state.experience_service.create_experience(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_experience(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
    Json(request): Json<SaveExperienceRequest>,
) -> ApiResult<Json<Experience>> {
    info!("PUT /api/experience/{} - request: {:?}", id, request);
    Ok(Json(state.experience_service.update_experience(&id, request).await?))
}

pub async fn delete_experience(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/experience/{}", id);
    state.experience_service.delete_experience(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
