use axum::{http::StatusCode, routing::post, Json, Router};
use shared::LogEntry;
use tracing::{debug, error, info, warn};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/logs", post(log_message))
}

/// Re-emit a browser log line through the server's subscriber
pub async fn log_message(Json(entry): Json<LogEntry>) -> StatusCode {
    let component = entry.component.as_deref().unwrap_or("frontend");

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!(component = %component, "{}", entry.message),
        "warn" => warn!(component = %component, "{}", entry.message),
        "error" => error!(component = %component, "{}", entry.message),
        // Unknown levels are logged as info
        _ => info!(component = %component, "{}", entry.message),
    }

    StatusCode::NO_CONTENT
}
