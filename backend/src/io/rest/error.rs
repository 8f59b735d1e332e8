use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ApiErrorBody;
use tracing::error;

use crate::domain::DomainError;

/// Error returned from handlers, rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, DomainError::Unauthorized.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Unauthorized | DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DomainError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal storage error");
            }
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let cases = [
            (DomainError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Project", "p1"), StatusCode::NOT_FOUND),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::Storage(anyhow::anyhow!("disk full")), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_storage_details_are_not_leaked() {
        let err = ApiError::from(DomainError::Storage(anyhow::anyhow!("/var/db locked")));
        assert!(!err.message.contains("/var/db"));
        let err = ApiError::from(DomainError::not_found("Skill", "s9"));
        assert_eq!(err.message, "Skill not found: s9");
    }
}
