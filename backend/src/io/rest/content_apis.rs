//! # REST API for Page Content
//!
//! Hero and about copy. Reads are public; saves need an operator session.

use axum::{extract::State, routing::get, Json, Router};
use shared::{AboutContent, HeroContent};
use tracing::info;

use crate::io::rest::auth::Operator;
use crate::io::rest::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content/hero", get(get_hero).put(save_hero))
        .route("/content/about", get(get_about).put(save_about))
}

pub async fn get_hero(State(state): State<AppState>) -> ApiResult<Json<HeroContent>> {
    info!("GET /api/content/hero");
    Ok(Json(state.content_service.get_hero().await?))
}

pub async fn save_hero(
    State(state): State<AppState>,
    _operator: Operator,
    Json(hero): Json<HeroContent>,
) -> ApiResult<Json<HeroContent>> {
    info!("PUT /api/content/hero");
    Ok(Json(state.content_service.save_hero(hero).await?))
}

pub async fn get_about(State(state): State<AppState>) -> ApiResult<Json<AboutContent>> {
    info!("GET /api/content/about");
    Ok(Json(state.content_service.get_about().await?))
}

pub async fn save_about(
    State(state): State<AppState>,
    _operator: Operator,
    Json(about): Json<AboutContent>,
) -> ApiResult<Json<AboutContent>> {
    info!("PUT /api/content/about");
    Ok(Json(state.content_service.save_about(about).await?))
}
