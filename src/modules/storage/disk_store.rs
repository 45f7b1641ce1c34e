//! Local-disk storage for uploaded images.
//!
//! Files land under `{root}/{category}/` where the category is the owning
//! entity's path segment (products, brands, news, ...). Stored names are
//! UUID-prefixed so concurrent uploads of identically named files never
//! overwrite each other. Entity records keep the path relative to the root.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::AppError;

pub struct DiskStore {
    root: PathBuf,
    public_prefix: String,
}

impl DiskStore {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            root: config.root,
            public_prefix: config.public_prefix,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload root if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload root {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// Persist one uploaded file and return its root-relative path.
    pub async fn save(
        &self,
        category: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        let dir = self.root.join(category);
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::Internal(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        let path = dir.join(&stored_name);

        fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", path.display(), e);
            AppError::Internal(format!("Failed to store uploaded file: {}", e))
        })?;

        tracing::debug!("Stored upload at {}", path.display());
        Ok(format!("{}/{}", category, stored_name))
    }

    /// URL a stored relative path is served from.
    #[allow(dead_code)]
    pub fn public_url(&self, relative: &str) -> String {
        format!("{}/{}", self.public_prefix, relative)
    }
}

/// Keep the original name readable but strip anything path-like.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UploadConfig;

    fn temp_store() -> DiskStore {
        let root = std::env::temp_dir().join(format!("catalog-uploads-{}", Uuid::new_v4()));
        DiskStore::new(UploadConfig {
            root,
            public_prefix: "/static/uploads".to_string(),
        })
    }

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("logo (1).png"), "logo__1_.png");
        assert_eq!(sanitize_filename("///"), "file");
    }

    #[tokio::test]
    async fn save_writes_file_and_returns_relative_path() {
        let store = temp_store();
        store.ensure_root().await.unwrap();

        let relative = store.save("products", "photo.png", b"not-a-real-png").await.unwrap();
        assert!(relative.starts_with("products/"));
        assert!(relative.ends_with("photo.png"));

        let on_disk = store.root().join(&relative);
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), b"not-a-real-png");
        assert_eq!(
            store.public_url(&relative),
            format!("/static/uploads/{}", relative)
        );

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test]
    async fn same_name_uploads_do_not_collide() {
        let store = temp_store();
        store.ensure_root().await.unwrap();

        let a = store.save("banners", "hero.jpg", b"one").await.unwrap();
        let b = store.save("banners", "hero.jpg", b"two").await.unwrap();
        assert_ne!(a, b);

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }
}
