//! Push subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A browser Push API subscription registered by a user agent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushSubscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Client public key (p256dh).
    pub key_p256dh: String,
    /// Client auth secret.
    pub key_auth: String,
    /// When the subscription was registered.
    pub created_at: DateTime<Utc>,
}
