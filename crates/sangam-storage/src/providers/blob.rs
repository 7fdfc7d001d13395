//! Cloud blob upload backend.
//!
//! Placeholder implementation. The container and connection string are
//! accepted from configuration so deployments can stage credentials, but
//! every operation reports `NOT_IMPLEMENTED` until the real client lands.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use sangam_core::config::BlobStorageConfig;
use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::traits::store::{FileStore, StoredFile};

/// Blob storage backend stub.
#[derive(Debug, Clone)]
pub struct BlobFileStore {
    /// Target container name.
    container: String,
}

impl BlobFileStore {
    /// Create a blob store from configuration.
    pub fn new(config: &BlobStorageConfig) -> Self {
        Self {
            container: config.container.clone(),
        }
    }
}

#[async_trait]
impl FileStore for BlobFileStore {
    fn backend_name(&self) -> &str {
        "blob"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }

    async fn upload(&self, _data: Bytes, _filename: &str, _owner: Uuid) -> AppResult<StoredFile> {
        Err(AppError::not_implemented(
            "Blob storage upload is not yet available",
        ))
    }

    async fn delete(&self, _path: &str) -> AppResult<bool> {
        Err(AppError::not_implemented(
            "Blob storage delete is not yet available",
        ))
    }

    fn url_for(&self, path: &str) -> String {
        format!("blob://{}/{}", self.container, path)
    }

    async fn exists(&self, _path: &str) -> AppResult<bool> {
        Err(AppError::not_implemented(
            "Blob storage lookup is not yet available",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sangam_core::error::ErrorKind;

    #[tokio::test]
    async fn operations_report_not_implemented() {
        let store = BlobFileStore::new(&BlobStorageConfig {
            container: "photos".to_string(),
            connection_string: "UseDevelopmentStorage=true".to_string(),
        });

        let err = store
            .upload(Bytes::from("x"), "a.jpg", Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);

        let err = store.delete("photos/a.jpg").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotImplemented);

        assert!(!store.health_check().await.unwrap());
    }
}
