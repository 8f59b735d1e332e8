use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use shared::{LoginRequest, LoginResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AdminConfig;
use crate::domain::error::{DomainError, DomainResult};

/// Lowercase hex SHA-256 of a password
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Byte comparison whose running time depends only on the lengths
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Operator login against the configured credentials, with in-memory bearer sessions.
///
/// Sessions do not survive a restart.
#[derive(Clone)]
pub struct AuthService {
    email: String,
    password_sha256: String,
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl AuthService {
    pub fn new(admin: &AdminConfig, session_ttl_minutes: i64) -> Self {
        Self {
            email: admin.email.trim().to_string(),
            password_sha256: admin.password_sha256.trim().to_lowercase(),
            ttl: Duration::minutes(session_ttl_minutes.max(1)),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Login is possible only with both an email and a password hash configured
    pub fn is_enabled(&self) -> bool {
        !self.email.is_empty() && !self.password_sha256.is_empty()
    }

    pub async fn login(&self, request: &LoginRequest) -> DomainResult<LoginResponse> {
        if !self.is_enabled() {
            warn!("Login attempt while no operator credentials are configured");
            return Err(DomainError::InvalidCredentials);
        }

        let email_matches = request.email.trim().eq_ignore_ascii_case(&self.email);
        let password_matches = constant_time_eq(
            hash_password(&request.password).as_bytes(),
            self.password_sha256.as_bytes(),
        );
        if !email_matches || !password_matches {
            warn!("Failed login for {}", request.email.trim());
            return Err(DomainError::InvalidCredentials);
        }

        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        self.sessions.write().await.insert(token.clone(), expires_at);

        info!("Operator logged in, session valid until {}", expires_at);
        Ok(LoginResponse {
            token,
            expires_at: expires_at.to_rfc3339(),
        })
    }

    /// Whether `token` names a live session. Expired sessions are dropped on the way.
    pub async fn is_authenticated(&self, token: &str) -> bool {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.contains_key(token)
    }

    /// Returns true if the session existed
    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            info!("Operator logged out");
        }
        removed
    }

    #[cfg(test)]
    async fn expire_all(&self) {
        let past = Utc::now() - Duration::seconds(1);
        for expires_at in self.sessions.write().await.values_mut() {
            *expires_at = past;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        let admin = AdminConfig {
            email: "Me@Example.com".to_string(),
            password_sha256: hash_password("hunter2").to_uppercase(),
        };
        AuthService::new(&admin, 60)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_hash_password() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_constant_time_eq() {
        let digest = hash_password("hunter2");
        assert!(constant_time_eq(digest.as_bytes(), hash_password("hunter2").as_bytes()));
        assert!(!constant_time_eq(digest.as_bytes(), hash_password("hunter3").as_bytes()));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }

    #[tokio::test]
    async fn test_login_and_session() {
        let auth = service();

        let response = auth.login(&login(" me@example.com ", "hunter2")).await.unwrap();
        assert!(auth.is_authenticated(&response.token).await);
        assert!(!auth.is_authenticated("made-up").await);

        assert!(auth.logout(&response.token).await);
        assert!(!auth.is_authenticated(&response.token).await);
        assert!(!auth.logout(&response.token).await);
    }

    #[tokio::test]
    async fn test_wrong_credentials() {
        let auth = service();
        assert!(matches!(
            auth.login(&login("me@example.com", "wrong")).await,
            Err(DomainError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login(&login("other@example.com", "hunter2")).await,
            Err(DomainError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_disabled_without_credentials() {
        let auth = AuthService::new(&AdminConfig::default(), 60);
        assert!(!auth.is_enabled());
        assert!(matches!(
            auth.login(&login("", "")).await,
            Err(DomainError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let auth = service();
        let response = auth.login(&login("me@example.com", "hunter2")).await.unwrap();
        auth.expire_all().await;
        assert!(!auth.is_authenticated(&response.token).await);
    }
}
