//! # REST API for Image Uploads
//!
//! The request body is the raw file. The folder comes from the path and the
//! original file name from `?filename=`.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use shared::{ImageFolder, UploadResponse};
use tracing::info;

use crate::io::rest::auth::Operator;
use crate::io::rest::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub filename: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/uploads/:folder", post(upload_image))
}

pub async fn upload_image(
    State(state): State<AppState>,
    _operator: Operator,
    Path(folder): Path<String>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    info!("POST /api/uploads/{} - {} ({} bytes)", folder, query.filename, body.len());

    let folder = ImageFolder::parse(&folder)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown upload folder: {}", folder)))?;
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let url = state
        .image_service
        .upload(folder, &query.filename, content_type, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}
