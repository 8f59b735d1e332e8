use thiserror::Error;

/// Failures a domain service can report to the IO layer
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(what: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound { what, id: id.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
