//! # REST API for Skills

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use shared::{SaveSkillRequest, Skill};
use tracing::info;

use crate::io::rest::auth::Operator;
use crate::io::rest::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route("/skills/:id", put(update_skill).delete(delete_skill))
}

/// List skills, highest score first
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Json<Vec<Skill>>> {
    info!("GET /api/skills");
    Ok(Json(state.skill_service.list_skills().await?))
}

pub async fn create_skill(
    State(state): State<AppState>,
    _operator: Operator,
    Json(request): Json<SaveSkillRequest>,
) -> ApiResult<(StatusCode, Json<Skill>)> {
    info!("POST /api/skills - request: {:?}", request);
    let skill = state.skill_service.create_skill(request).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

pub async fn update_skill(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
    Json(request): Json<SaveSkillRequest>,
) -> ApiResult<Json<Skill>> {
    info!("PUT /api/skills/{} - request: {:?}", id, request);
    Ok(Json(state.skill_service.update_skill(&id, request).await?))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    _operator: Operator,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/skills/{}", id);
    state.skill_service.delete_skill(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
