//! Server configuration.
//!
//! Read from a YAML file (`$PORTFOLIO_CONFIG`, default `portfolio.yaml`), then
//! overridden field by field from the environment. A missing file is not an
//! error: every field has a default suitable for local development.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::SiteInfo;

pub const DEFAULT_CONFIG_PATH: &str = "portfolio.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub bind: String,
    pub database_url: String,
    pub upload_dir: PathBuf,
    /// Origin used when building public URLs for uploaded images
    pub public_base_url: String,
    /// Built frontend bundle served for every non-API path
    pub static_dir: PathBuf,
    pub allowed_origin: String,
    pub max_upload_bytes: usize,
    pub session_ttl_minutes: i64,
    pub log_level: String,
    pub admin: AdminConfig,
    pub site: SiteConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            database_url: "sqlite:portfolio.db".to_string(),
            upload_dir: PathBuf::from("uploads"),
            public_base_url: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from("../frontend/dist"),
            allowed_origin: "http://localhost:8080".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            session_ttl_minutes: 720,
            log_level: "info".to_string(),
            admin: AdminConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

/// Operator credentials. Login stays disabled while either field is empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    /// Lowercase hex SHA-256 of the password
    pub password_sha256: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github_user: Option<String>,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: None,
            contact_email: "hello@example.com".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Load from `$PORTFOLIO_CONFIG` (or the default path) and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var("PORTFOLIO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply `PORTFOLIO_*` overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("PORTFOLIO_BIND") {
            self.bind = bind;
        }
        if let Some(url) = lookup("PORTFOLIO_DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(email) = lookup("PORTFOLIO_ADMIN_EMAIL") {
            self.admin.email = email;
        }
        if let Some(hash) = lookup("PORTFOLIO_ADMIN_PASSWORD_SHA256") {
            self.admin.password_sha256 = hash;
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind))
    }

    pub fn site_info(&self) -> SiteInfo {
        SiteInfo {
            github_user: self
                .site
                .github_user
                .clone()
                .filter(|user| !user.trim().is_empty()),
            contact_email: self.site.contact_email.clone(),
        }
    }
}
