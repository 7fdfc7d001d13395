//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration for photo uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use: `"local"` or `"blob"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Local filesystem storage configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// Cloud blob storage configuration.
    #[serde(default)]
    pub blob: BlobStorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            max_upload_size_bytes: default_max_upload(),
            local: LocalStorageConfig::default(),
            blob: BlobStorageConfig::default(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for uploaded files.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// URL path prefix under which the upload root is served.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            url_prefix: default_url_prefix(),
        }
    }
}

/// Cloud blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BlobStorageConfig {
    /// Blob container name.
    #[serde(default)]
    pub container: String,
    /// Connection string for the blob account.
    #[serde(default)]
    pub connection_string: String,
}

impl BlobStorageConfig {
    /// Whether enough configuration is present to construct the backend.
    pub fn is_configured(&self) -> bool {
        !self.container.is_empty() && !self.connection_string.is_empty()
    }
}

fn default_backend() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_upload_root() -> String {
    "./data/uploads".to_string()
}

fn default_url_prefix() -> String {
    "/uploads".to_string()
}
