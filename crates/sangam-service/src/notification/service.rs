//! Notification listing and read-state management.

use std::sync::Arc;

use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_database::repositories::notification::NotificationRepository;
use sangam_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages the current user's notification feed.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Lists notifications for the current user, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        unread_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notifications
            .list_for_user(ctx.user_id, unread_only, &page)
            .await
    }

    /// Unread notification count for the badge.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notifications.unread_count(ctx.user_id).await
    }

    /// Marks a single notification read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> AppResult<Notification> {
        self.notifications
            .mark_read(notification_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    /// Marks all of the current user's notifications read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notifications.mark_all_read(ctx.user_id).await
    }

    /// Deletes a notification from the feed.
    pub async fn delete(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        let deleted = self
            .notifications
            .delete(notification_id, ctx.user_id)
            .await?;
        if !deleted {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }
}
