//! # SQLite Storage Module
//!
//! Document store backed by a single `documents` table.

pub mod db;

pub use db::DbConnection;
