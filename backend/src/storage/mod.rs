//! # Storage Module
//!
//! Persistence for site content and uploaded images.
//!
//! Records are kept as loose JSON documents grouped into named collections
//! (`projects`, `experience`, `skills`, `content`). The domain layer only sees
//! the [`DocumentStorage`] and [`ImageStorage`] traits, so the SQLite store and
//! the upload directory can be swapped without touching the services.
//!
//! ## Components
//!
//! - **traits.rs** - storage abstractions used by the domain layer
//! - **sqlite/** - SQLite document store
//! - **repository.rs** - typed access to one collection over [`DocumentStorage`]
//! - **files.rs** - upload directory on local disk

pub mod files;
pub mod repository;
pub mod sqlite;
pub mod traits;

pub use files::FileImageStore;
pub use repository::Repository;
pub use sqlite::DbConnection;
pub use traits::{DocumentStorage, ImageStorage, StoredDocument};
