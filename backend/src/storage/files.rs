//! Upload directory on local disk.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::storage::traits::ImageStorage;

/// Writes uploads under `<root>/<folder>/<name>`
#[derive(Debug, Clone)]
pub struct FileImageStore {
    root: PathBuf,
}

impl FileImageStore {
    /// Open the upload root, creating it if needed
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create upload directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Reduce a client-supplied file name to `[A-Za-z0-9._-]`, with no leading dot.
pub fn sanitize_file_name(name: &str) -> String {
    // Browsers on Windows may send a full path
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

#[async_trait]
impl ImageStorage for FileImageStore {
    async fn store_image(
        &self,
        folder: &str,
        file_name: &str,
        timestamped: bool,
        bytes: &[u8],
    ) -> Result<String> {
        if folder.is_empty() || !folder.chars().all(|c| c.is_ascii_alphanumeric()) {
            bail!("Invalid upload folder: {}", folder);
        }

        let name = sanitize_file_name(file_name);
        let name = if timestamped {
            format!("{}_{}", Utc::now().timestamp_millis(), name)
        } else {
            name
        };

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(format!("{}/{}", folder, name))
    }
}
