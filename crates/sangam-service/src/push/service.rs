//! Push subscription management.

use std::sync::Arc;

use tracing::info;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_database::repositories::push_subscription::PushSubscriptionRepository;
use sangam_entity::push::PushSubscription;

use crate::context::RequestContext;

/// Manages a user's browser push subscriptions.
#[derive(Debug, Clone)]
pub struct PushService {
    subscriptions: Arc<PushSubscriptionRepository>,
}

impl PushService {
    /// Creates a new push service.
    pub fn new(subscriptions: Arc<PushSubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    /// Registers a subscription for the current user.
    ///
    /// Re-subscribing an existing endpoint refreshes its keys.
    pub async fn subscribe(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        key_p256dh: &str,
        key_auth: &str,
    ) -> AppResult<PushSubscription> {
        if endpoint.trim().is_empty() {
            return Err(AppError::validation("Subscription endpoint is required"));
        }
        if !endpoint.starts_with("https://") {
            return Err(AppError::validation(
                "Subscription endpoint must be an https URL",
            ));
        }
        if key_p256dh.trim().is_empty() || key_auth.trim().is_empty() {
            return Err(AppError::validation("Subscription keys are required"));
        }

        let sub = self
            .subscriptions
            .upsert(ctx.user_id, endpoint, key_p256dh, key_auth)
            .await?;

        info!(user_id = %ctx.user_id, subscription_id = %sub.id, "Push subscription registered");
        Ok(sub)
    }

    /// Removes a subscription by endpoint.
    pub async fn unsubscribe(&self, ctx: &RequestContext, endpoint: &str) -> AppResult<()> {
        let removed = self
            .subscriptions
            .delete_by_endpoint(ctx.user_id, endpoint)
            .await?;
        if !removed {
            return Err(AppError::not_found("Subscription not found"));
        }
        Ok(())
    }

    /// Lists the current user's subscriptions.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<PushSubscription>> {
        self.subscriptions.list_for_user(ctx.user_id).await
    }
}
