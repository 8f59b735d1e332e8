//! # Domain Module
//!
//! Business rules for the portfolio: what a valid project, experience entry
//! or skill looks like, how lists are ordered, who may edit, and where
//! uploaded images go. Services here know nothing about HTTP.
//!
//! ## Module Organization
//!
//! - **content_service**: hero and about page copy
//! - **project_service**: portfolio projects and their galleries
//! - **experience_service**: work experience entries
//! - **skill_service**: rated skills
//! - **auth_service**: operator login and bearer sessions
//! - **image_service**: upload validation and public URLs

pub mod auth_service;
pub mod content_service;
pub mod error;
pub mod experience_service;
pub mod image_service;
pub mod project_service;
pub mod skill_service;

pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use error::{DomainError, DomainResult};
pub use experience_service::ExperienceService;
pub use image_service::ImageService;
pub use project_service::ProjectService;
pub use skill_service::SkillService;
