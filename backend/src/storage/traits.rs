//! # Storage Traits
//!
//! Abstractions that let different storage backends be used
//! interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One stored document: its key within the collection and its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

/// Schemaless document collections keyed by `(collection, id)`.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Insert or replace the document at `collection/id`
    async fn put_document(&self, collection: &str, id: &str, body: &Value) -> Result<()>;

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Every document of a collection in insertion order
    async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Returns true if the document existed
    async fn delete_document(&self, collection: &str, id: &str) -> Result<bool>;
}

/// Where uploaded image bytes end up.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store `bytes` under `folder` and return the path relative to the upload root,
    /// using `/` as separator (e.g. `projects/1718000000000_shot.jpg`).
    async fn store_image(
        &self,
        folder: &str,
        file_name: &str,
        timestamped: bool,
        bytes: &[u8],
    ) -> Result<String>;
}
