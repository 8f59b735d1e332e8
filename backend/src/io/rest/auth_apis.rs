//! # REST API for Operator Sessions

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use shared::{LoginRequest, LoginResponse, SessionStatus};
use tracing::info;

use crate::io::rest::auth::{bearer_token, Operator};
use crate::io::rest::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    info!("POST /api/auth/login - email: {}", request.email);
    Ok(Json(state.auth_service.login(&request).await?))
}

pub async fn logout(State(state): State<AppState>, operator: Operator) -> StatusCode {
    info!("POST /api/auth/logout");
    state.auth_service.logout(&operator.token).await;
    StatusCode::NO_CONTENT
}

/// Whether the caller's bearer token is a live session. Never fails.
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionStatus> {
    let authenticated = match bearer_token(&headers) {
        Some(token) => state.auth_service.is_authenticated(&token).await,
        None => false,
    };
    Json(SessionStatus { authenticated })
}
