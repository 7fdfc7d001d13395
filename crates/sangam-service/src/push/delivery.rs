//! Push delivery to browser push service endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use sangam_core::config::PushConfig;
use sangam_core::result::AppResult;
use sangam_database::repositories::push_subscription::PushSubscriptionRepository;
use sangam_entity::notification::NotificationKind;

/// Payload posted to each subscription endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PushPayload {
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Event kind for client-side routing.
    pub kind: NotificationKind,
    /// Related resource, if any.
    pub resource_id: Option<Uuid>,
}

/// Delivers push payloads to a user's registered endpoints.
///
/// Delivery is best effort: failures are logged, never surfaced to the
/// operation that triggered them. Endpoints the push service reports as
/// gone are pruned.
#[derive(Debug, Clone)]
pub struct PushDelivery {
    client: reqwest::Client,
    config: PushConfig,
    subscriptions: Arc<PushSubscriptionRepository>,
}

impl PushDelivery {
    /// Creates a new delivery client.
    pub fn new(config: PushConfig, subscriptions: Arc<PushSubscriptionRepository>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();
        Self {
            client,
            config,
            subscriptions,
        }
    }

    /// Whether delivery is enabled in configuration.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// The public VAPID key handed to subscribing clients.
    pub fn vapid_public_key(&self) -> &str {
        &self.config.vapid_public_key
    }

    /// Posts the payload to every endpoint the user has registered.
    pub async fn deliver_to_user(&self, user_id: Uuid, payload: &PushPayload) -> AppResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let subs = self.subscriptions.list_for_user(user_id).await?;
        for sub in subs {
            match self
                .client
                .post(&sub.endpoint)
                .header("TTL", "60")
                .json(payload)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status == reqwest::StatusCode::NOT_FOUND
                        || status == reqwest::StatusCode::GONE
                    {
                        debug!(
                            subscription_id = %sub.id,
                            status = %status,
                            "Push endpoint gone, pruning subscription"
                        );
                        let _ = self.subscriptions.delete_by_id(sub.id).await;
                    } else if !status.is_success() {
                        warn!(
                            subscription_id = %sub.id,
                            status = %status,
                            "Push delivery rejected"
                        );
                    }
                }
                Err(e) => {
                    warn!(subscription_id = %sub.id, error = %e, "Push delivery failed");
                }
            }
        }

        Ok(())
    }
}
