//! Response body DTOs not covered by the shared envelope types.

use serde::Serialize;

/// Result of a bulk update such as mark-all-read.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    /// Number of rows affected.
    pub updated: u64,
}

/// Push configuration exposed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct VapidResponse {
    /// Whether push delivery is enabled on this server.
    pub enabled: bool,
    /// Public VAPID key for `PushManager.subscribe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall status: "ok" or "degraded".
    pub status: String,
    /// Whether the database answered.
    pub database: bool,
    /// Whether the upload store answered.
    pub storage: bool,
}
