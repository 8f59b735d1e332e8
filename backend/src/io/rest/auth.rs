//! Bearer-token check for operator-only routes.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use crate::io::rest::error::ApiError;
use crate::AppState;

/// Proof that the request carries a live operator session.
/// Taking it as a handler argument makes the route operator-only.
#[derive(Debug, Clone)]
pub struct Operator {
    pub token: String,
}

/// The token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for Operator {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            warn!("{} {} without bearer token", parts.method, parts.uri.path());
            return Err(ApiError::unauthorized());
        };
        if !state.auth_service.is_authenticated(&token).await {
            warn!("{} {} with unknown or expired session", parts.method, parts.uri.path());
            return Err(ApiError::unauthorized());
        }
        Ok(Operator { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc".to_string()));
        assert_eq!(bearer_token(&headers("bearer  abc ")), Some("abc".to_string()));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
