//! # sangam-storage
//!
//! Upload storage backends for Sangam. Photos land on the local
//! filesystem by default; a cloud blob backend is planned but not yet
//! wired up, so selecting it falls back to local.

pub mod providers;

use std::sync::Arc;

use tracing::warn;

use sangam_core::config::{ServerConfig, StorageConfig};
use sangam_core::result::AppResult;
use sangam_core::traits::store::FileStore;

use providers::blob::BlobFileStore;
use providers::local::LocalFileStore;

/// Construct the file store selected by configuration.
///
/// An unusable blob configuration logs a warning and falls back to the
/// local backend rather than refusing to start.
pub async fn select_store(
    storage: &StorageConfig,
    server: &ServerConfig,
) -> AppResult<Arc<dyn FileStore>> {
    match storage.backend.as_str() {
        "blob" if storage.blob.is_configured() => {
            Ok(Arc::new(BlobFileStore::new(&storage.blob)))
        }
        "blob" => {
            warn!("Blob storage selected but not configured, falling back to local");
            let store = LocalFileStore::new(&storage.local, &server.public_base_url).await?;
            Ok(Arc::new(store))
        }
        "local" => {
            let store = LocalFileStore::new(&storage.local, &server.public_base_url).await?;
            Ok(Arc::new(store))
        }
        other => {
            warn!(backend = other, "Unknown storage backend, falling back to local");
            let store = LocalFileStore::new(&storage.local, &server.public_base_url).await?;
            Ok(Arc::new(store))
        }
    }
}
