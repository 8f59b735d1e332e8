//! Typed access to one document collection.

use anyhow::{anyhow, Result};
use shared::Document;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

use crate::storage::traits::DocumentStorage;

/// Reads and writes records of type `T` in `T::COLLECTION`
pub struct Repository<T: Document> {
    storage: Arc<dyn DocumentStorage>,
    _record: PhantomData<fn() -> T>,
}

// Derived Clone would require T: Clone on the marker
impl<T: Document> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Document> Repository<T> {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self {
            storage,
            _record: PhantomData,
        }
    }

    /// All records in insertion order. Documents that are not JSON objects are skipped.
    pub async fn list(&self) -> Result<Vec<T>> {
        let documents = self.storage.list_documents(T::COLLECTION).await?;
        let mut records = Vec::with_capacity(documents.len());
        for doc in documents {
            match T::from_document(&doc.id, doc.body) {
                Ok(record) => records.push(record),
                Err(e) => warn!("{}", e),
            }
        }
        Ok(records)
    }

    /// A document that is not a JSON object reads as missing, the same as in `list`.
    pub async fn get(&self, id: &str) -> Result<Option<T>> {
        let Some(body) = self.storage.get_document(T::COLLECTION, id).await? else {
            return Ok(None);
        };
        match T::from_document(id, body) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("{}", e);
                Ok(None)
            }
        }
    }

    /// Insert or replace the record under its own id
    pub async fn save(&self, record: &T) -> Result<()> {
        let body = record.to_document().map_err(|e| anyhow!(e))?;
        self.storage
            .put_document(T::COLLECTION, record.id(), &body)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.storage.delete_document(T::COLLECTION, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use serde_json::json;
    use shared::{Project, Skill};

    async fn storage() -> Arc<dyn DocumentStorage> {
        Arc::new(DbConnection::init_test().await.expect("Failed to create test database"))
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip_keeps_id_out_of_body() {
        let storage = storage().await;
        let repo: Repository<Project> = Repository::new(storage.clone());

        let project = Project {
            id: "p1".into(),
            title: "Poster".into(),
            category: Some("graphic design".into()),
            ..Default::default()
        };
        repo.save(&project).await.unwrap();

        let body = storage.get_document("projects", "p1").await.unwrap().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(repo.get("p1").await.unwrap(), Some(project));
    }

    #[tokio::test]
    async fn test_list_skips_non_object_documents() {
        let storage = storage().await;
        storage.put_document("skills", "a", &json!({"name": "Rust", "score": "88"})).await.unwrap();
        storage.put_document("skills", "b", &json!("just a string")).await.unwrap();

        let repo: Repository<Skill> = Repository::new(storage);
        let skills = repo.list().await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, "a");
        assert_eq!(skills[0].score, 88);
    }

    #[tokio::test]
    async fn test_get_treats_non_object_document_as_missing() {
        let storage = storage().await;
        storage.put_document("projects", "bad", &json!(["not", "an", "object"])).await.unwrap();

        let repo: Repository<Project> = Repository::new(storage);
        assert_eq!(repo.get("bad").await.unwrap(), None);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
