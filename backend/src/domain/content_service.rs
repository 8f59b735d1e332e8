use serde::{de::DeserializeOwned, Serialize};
use shared::content::CONTENT_COLLECTION;
use shared::{AboutContent, HeroContent};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::DomainResult;
use crate::storage::DocumentStorage;

/// Single-document page copy: the home hero and the about page
#[derive(Clone)]
pub struct ContentService {
    storage: Arc<dyn DocumentStorage>,
}

impl ContentService {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    pub async fn get_hero(&self) -> DomainResult<HeroContent> {
        self.load(HeroContent::KEY).await
    }

    pub async fn save_hero(&self, hero: HeroContent) -> DomainResult<HeroContent> {
        info!("Saving hero content: title={}", hero.title);
        self.store(HeroContent::KEY, &hero).await?;
        Ok(hero)
    }

    pub async fn get_about(&self) -> DomainResult<AboutContent> {
        self.load(AboutContent::KEY).await
    }

    pub async fn save_about(&self, about: AboutContent) -> DomainResult<AboutContent> {
        info!("Saving about content: title={}", about.title);
        self.store(AboutContent::KEY, &about).await?;
        Ok(about)
    }

    /// Missing or unreadable documents fall back to the record's default
    async fn load<T>(&self, key: &str) -> DomainResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(body) = self.storage.get_document(CONTENT_COLLECTION, key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_value(body) {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!("Content document {} is malformed, using defaults: {}", key, e);
                Ok(T::default())
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, content: &T) -> DomainResult<()> {
        let body = serde_json::to_value(content).map_err(anyhow::Error::from)?;
        self.storage
            .put_document(CONTENT_COLLECTION, key, &body)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use serde_json::json;

    async fn setup_test() -> (ContentService, Arc<dyn DocumentStorage>) {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let storage: Arc<dyn DocumentStorage> = Arc::new(db);
        (ContentService::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_missing_content_uses_defaults() {
        let (service, _) = setup_test().await;

        let hero = service.get_hero().await.unwrap();
        assert_eq!(hero, HeroContent::default());
        assert_eq!(hero.title, "Full Stack Developer");

        let about = service.get_about().await.unwrap();
        assert_eq!(about.display_title(), "About Me");
    }

    #[tokio::test]
    async fn test_save_and_reload_hero() {
        let (service, _) = setup_test().await;

        let hero = HeroContent {
            name: "Sam".into(),
            title: "Photographer".into(),
            description: "Light and shadow.".into(),
            image_url: "http://localhost:3000/uploads/hero/me.jpg".into(),
        };
        service.save_hero(hero.clone()).await.unwrap();
        assert_eq!(service.get_hero().await.unwrap(), hero);
    }

    #[tokio::test]
    async fn test_partial_document_keeps_field_defaults() {
        let (service, storage) = setup_test().await;
        storage
            .put_document("content", "about", &json!({"title": "Hi", "imageUrl": null}))
            .await
            .unwrap();

        let about = service.get_about().await.unwrap();
        assert_eq!(about.title, "Hi");
        assert_eq!(about.image_url, "");
        assert_eq!(about.display_description(), "No description added yet.");
    }

    #[tokio::test]
    async fn test_non_object_document_falls_back() {
        let (service, storage) = setup_test().await;
        storage.put_document("content", "hero", &json!([1, 2])).await.unwrap();
        assert_eq!(service.get_hero().await.unwrap(), HeroContent::default());
    }
}
