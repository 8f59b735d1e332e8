use axum::{extract::State, routing::get, Json, Router};
use shared::SiteInfo;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/site", get(site_info))
}

/// Public settings the frontend needs: GitHub user and contact address
pub async fn site_info(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(state.site_info.clone())
}
