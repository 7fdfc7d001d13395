//! Notification fan-out: store, hint, push.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use sangam_core::result::AppResult;
use sangam_database::repositories::notification::NotificationRepository;
use sangam_entity::notification::{Notification, NotificationKind};
use sangam_realtime::RealtimeEngine;

use crate::push::delivery::{PushDelivery, PushPayload};

/// Fans a platform event out to every notification surface.
///
/// The stored notification row is the source of truth and the only part
/// that may fail the calling operation. The WebSocket hint and the push
/// delivery are best effort on top of it.
#[derive(Debug, Clone)]
pub struct Notifier {
    notifications: Arc<NotificationRepository>,
    realtime: RealtimeEngine,
    push: PushDelivery,
}

impl Notifier {
    /// Creates a new notifier.
    pub fn new(
        notifications: Arc<NotificationRepository>,
        realtime: RealtimeEngine,
        push: PushDelivery,
    ) -> Self {
        Self {
            notifications,
            realtime,
            push,
        }
    }

    /// Stores a notification and nudges the recipient.
    pub async fn notify(
        &self,
        user_id: Uuid,
        kind: NotificationKind,
        title: &str,
        body: &str,
        actor_id: Option<Uuid>,
        resource_id: Option<Uuid>,
    ) -> AppResult<Notification> {
        let notification = self
            .notifications
            .create(user_id, kind, title, body, actor_id, resource_id)
            .await?;

        self.realtime.hint_notification(&notification);

        let payload = PushPayload {
            title: title.to_string(),
            body: body.to_string(),
            kind,
            resource_id,
        };
        if let Err(e) = self.push.deliver_to_user(user_id, &payload).await {
            warn!(user_id = %user_id, error = %e, "Push fan-out failed");
        }

        Ok(notification)
    }

    /// Access to the realtime engine for message-specific hints.
    pub fn realtime(&self) -> &RealtimeEngine {
        &self.realtime
    }
}
