//! # Portfolio Backend
//!
//! Document store, image host and operator sessions behind the portfolio site.
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, validation)
//!     ↓
//! Storage Layer (SQLite documents, upload directory)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use shared::SiteInfo;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::PortfolioConfig;
use crate::domain::{
    AuthService, ContentService, ExperienceService, ImageService, ProjectService, SkillService,
};
use crate::storage::{DbConnection, DocumentStorage, FileImageStore, ImageStorage};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
    pub project_service: ProjectService,
    pub experience_service: ExperienceService,
    pub skill_service: SkillService,
    pub auth_service: AuthService,
    pub image_service: ImageService,
    pub site_info: SiteInfo,
}

impl AppState {
    /// Wire services over the given storage backends
    pub fn new(
        documents: Arc<dyn DocumentStorage>,
        images: Arc<dyn ImageStorage>,
        config: &PortfolioConfig,
    ) -> Self {
        Self {
            content_service: ContentService::new(documents.clone()),
            project_service: ProjectService::new(documents.clone()),
            experience_service: ExperienceService::new(documents.clone()),
            skill_service: SkillService::new(documents),
            auth_service: AuthService::new(&config.admin, config.session_ttl_minutes),
            image_service: ImageService::new(
                images,
                config.public_base_url.clone(),
                config.max_upload_bytes,
            ),
            site_info: config.site_info(),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &PortfolioConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up upload directory at {}", config.upload_dir.display());
    let image_store = FileImageStore::new(&config.upload_dir)?;

    info!("Setting up application state");
    Ok(AppState::new(Arc::new(db_conn), Arc::new(image_store), config))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &PortfolioConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed_origin: {}", config.allowed_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = io::rest::router()
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    Ok(Router::new()
        .nest("/api", api_routes)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
