use shared::ImageFolder;
use std::sync::Arc;
use tracing::info;

use crate::domain::error::{DomainError, DomainResult};
use crate::storage::ImageStorage;

/// Validates uploads and turns stored paths into public URLs
#[derive(Clone)]
pub struct ImageService {
    storage: Arc<dyn ImageStorage>,
    public_base_url: String,
    max_bytes: usize,
}

impl ImageService {
    pub fn new(storage: Arc<dyn ImageStorage>, public_base_url: String, max_bytes: usize) -> Self {
        Self {
            storage,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    /// Store an uploaded image and return its public URL
    pub async fn upload(
        &self,
        folder: ImageFolder,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> DomainResult<String> {
        let content_type = content_type.unwrap_or_default();
        if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(DomainError::Validation(format!(
                "Only image uploads are accepted, got '{}'",
                content_type
            )));
        }
        if bytes.is_empty() {
            return Err(DomainError::Validation("Upload is empty".to_string()));
        }
        if bytes.len() > self.max_bytes {
            return Err(DomainError::Validation(format!(
                "Upload exceeds {} bytes",
                self.max_bytes
            )));
        }

        let path = self
            .storage
            .store_image(folder.as_str(), file_name, folder.timestamped(), bytes)
            .await?;
        let url = format!("{}/uploads/{}", self.public_base_url, path);
        info!("Uploaded {} image: {}", folder, url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileImageStore;
    use tempfile::tempdir;

    fn service(root: &std::path::Path, max_bytes: usize) -> ImageService {
        let store = FileImageStore::new(root).unwrap();
        ImageService::new(Arc::new(store), "http://localhost:3000/".to_string(), max_bytes)
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let dir = tempdir().unwrap();
        let images = service(dir.path(), 1024);

        let url = images
            .upload(ImageFolder::Hero, "me.jpg", Some("image/jpeg"), b"jpeg")
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:3000/uploads/hero/me.jpg");
        assert!(dir.path().join("hero/me.jpg").exists());
    }

    #[tokio::test]
    async fn test_rejects_non_images() {
        let dir = tempdir().unwrap();
        let images = service(dir.path(), 1024);

        for content_type in [None, Some("text/html"), Some("application/pdf")] {
            assert!(matches!(
                images.upload(ImageFolder::Projects, "x", content_type, b"data").await,
                Err(DomainError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_rejects_empty_and_oversized() {
        let dir = tempdir().unwrap();
        let images = service(dir.path(), 4);

        assert!(matches!(
            images.upload(ImageFolder::About, "a.png", Some("image/png"), b"").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            images.upload(ImageFolder::About, "a.png", Some("image/png"), b"12345").await,
            Err(DomainError::Validation(_))
        ));
        assert!(images
            .upload(ImageFolder::About, "a.png", Some("image/png"), b"1234")
            .await
            .is_ok());
    }
}
