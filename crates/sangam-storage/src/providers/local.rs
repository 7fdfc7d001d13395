//! Local filesystem upload backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use sangam_core::config::LocalStorageConfig;
use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_core::traits::store::{FileStore, StoredFile};

/// Stores uploads under a configured root directory, namespaced per user.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    /// Root directory for all uploads.
    root: PathBuf,
    /// Absolute URL prefix for serving uploads.
    url_base: String,
}

impl LocalFileStore {
    /// Create a new local store, creating the root directory if missing.
    pub async fn new(config: &LocalStorageConfig, public_base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(&config.upload_root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload root: {}", root.display()),
                e,
            )
        })?;

        let url_base = format!(
            "{}{}",
            public_base_url.trim_end_matches('/'),
            &config.url_prefix
        );

        Ok(Self { root, url_base })
    }

    /// Resolve a relative path to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

/// Strip path separators and other unsafe characters from an uploaded
/// filename, keeping the extension intact.
fn sanitize_filename(filename: &str) -> String {
    let name: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() || name.chars().all(|c| c == '.') {
        "upload".to_string()
    } else {
        name
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    fn backend_name(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn upload(&self, data: Bytes, filename: &str, owner: Uuid) -> AppResult<StoredFile> {
        let safe_name = sanitize_filename(filename);
        let path = format!("{}/{}_{}", owner, Uuid::new_v4(), safe_name);
        let full_path = self.resolve(&path);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write upload: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Stored upload");
        Ok(StoredFile {
            url: self.url_for(&path),
            path,
        })
    }

    async fn delete(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path);
        if !full_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete upload: {path}"),
                e,
            )
        })?;
        Ok(true)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.url_base, path.trim_start_matches('/'))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.resolve(path).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(root: &Path) -> LocalStorageConfig {
        LocalStorageConfig {
            upload_root: root.to_str().unwrap().to_string(),
            url_prefix: "/uploads".to_string(),
        }
    }

    #[tokio::test]
    async fn upload_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(&test_config(dir.path()), "http://localhost:8080")
            .await
            .unwrap();

        let owner = Uuid::new_v4();
        let stored = store
            .upload(Bytes::from("photo-bytes"), "me.jpg", owner)
            .await
            .unwrap();

        assert!(stored.path.starts_with(&owner.to_string()));
        assert!(stored.path.ends_with("me.jpg"));
        assert!(stored
            .url
            .starts_with("http://localhost:8080/uploads/"));
        assert!(store.exists(&stored.path).await.unwrap());

        assert!(store.delete(&stored.path).await.unwrap());
        assert!(!store.exists(&stored.path).await.unwrap());
        assert!(!store.delete(&stored.path).await.unwrap());
    }

    #[tokio::test]
    async fn uploads_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(&test_config(dir.path()), "http://localhost:8080")
            .await
            .unwrap();

        let owner = Uuid::new_v4();
        let first = store
            .upload(Bytes::from("a"), "same.jpg", owner)
            .await
            .unwrap();
        let second = store
            .upload(Bytes::from("b"), "same.jpg", owner)
            .await
            .unwrap();

        assert_ne!(first.path, second.path);
        assert!(store.exists(&first.path).await.unwrap());
        assert!(store.exists(&second.path).await.unwrap());
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("my photo.jpg"), "my_photo.jpg");
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename(".."), "upload");
    }
}
