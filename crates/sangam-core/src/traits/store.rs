//! File-store trait for pluggable upload backends.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::result::AppResult;

/// The result of storing an uploaded file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoredFile {
    /// Backend-relative path of the stored file.
    pub path: String,
    /// Public URL at which the file can be fetched.
    pub url: String,
}

/// Trait for upload storage backends.
///
/// Two implementations exist in `sangam-storage`: a local filesystem
/// backend and a cloud blob backend. The backend is selected once at
/// startup from configuration.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "local", "blob").
    fn backend_name(&self) -> &str;

    /// Check whether the backend is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store the given bytes under a name derived from `filename`,
    /// namespaced by the owning user.
    async fn upload(&self, data: Bytes, filename: &str, owner: Uuid) -> AppResult<StoredFile>;

    /// Delete a stored file. Returns `false` if the file did not exist.
    async fn delete(&self, path: &str) -> AppResult<bool>;

    /// Return the public URL for a stored path.
    fn url_for(&self, path: &str) -> String;

    /// Check whether a stored file exists.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
