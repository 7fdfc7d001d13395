//! Profile retrieval, updates, and view tracking.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_database::repositories::message::MessageRepository;
use sangam_database::repositories::profile_view::ProfileViewRepository;
use sangam_database::repositories::user::UserRepository;
use sangam_entity::notification::NotificationKind;
use sangam_entity::profile_view::ProfileView;
use sangam_entity::user::{Photo, UpdateProfile, User, UserStatus, sort_photos_for_display};

use crate::context::RequestContext;
use crate::notification::fanout::Notifier;

/// A user profile together with its photos, ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileWithPhotos {
    /// The profile owner.
    #[serde(flatten)]
    pub user: User,
    /// Photos, primary first.
    pub photos: Vec<Photo>,
}

/// Manages user profiles and profile view tracking.
#[derive(Debug, Clone)]
pub struct ProfileService {
    users: Arc<UserRepository>,
    views: Arc<ProfileViewRepository>,
    messages: Arc<MessageRepository>,
    notifier: Notifier,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(
        users: Arc<UserRepository>,
        views: Arc<ProfileViewRepository>,
        messages: Arc<MessageRepository>,
        notifier: Notifier,
    ) -> Self {
        Self {
            users,
            views,
            messages,
            notifier,
        }
    }

    /// The current user's own profile with photos.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<ProfileWithPhotos> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.with_photos(user).await
    }

    /// Another user's profile with photos.
    ///
    /// Viewing records a profile view and notifies the owner, at most
    /// once per viewer per day. View bookkeeping never fails the read.
    pub async fn view(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<ProfileWithPhotos> {
        let user = self
            .users
            .find_active_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if user_id != ctx.user_id {
            if let Err(e) = self.record_view(ctx, user_id).await {
                warn!(viewer = %ctx.user_id, viewed = %user_id, error = %e, "Failed to record profile view");
            }
        }

        self.with_photos(user).await
    }

    async fn record_view(&self, ctx: &RequestContext, viewed_user_id: Uuid) -> AppResult<()> {
        let already_today = self.views.viewed_today(ctx.user_id, viewed_user_id).await?;
        let has_messaged = self.messages.has_messaged(ctx.user_id, viewed_user_id).await?;
        self.views
            .record(ctx.user_id, viewed_user_id, has_messaged)
            .await?;

        if !already_today {
            self.notifier
                .notify(
                    viewed_user_id,
                    NotificationKind::ProfileViewed,
                    "Profile viewed",
                    &format!("{} viewed your profile", ctx.username),
                    Some(ctx.user_id),
                    None,
                )
                .await?;
        }
        Ok(())
    }

    /// Updates the current user's profile fields.
    pub async fn update(&self, ctx: &RequestContext, update: &UpdateProfile) -> AppResult<User> {
        let user = self.users.update_profile(ctx.user_id, update).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Browse active profiles, newest first.
    pub async fn browse(
        &self,
        _ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<User>> {
        self.users.list_active(&page).await
    }

    /// Who viewed the current user's profile, most recent first.
    pub async fn viewers(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<ProfileView>> {
        self.views.list_for_user(ctx.user_id, &page).await
    }

    /// Soft-deletes the current user's account.
    pub async fn deactivate(&self, ctx: &RequestContext) -> AppResult<()> {
        self.users.set_status(ctx.user_id, UserStatus::Deleted).await?;
        info!(user_id = %ctx.user_id, "Account deactivated");
        Ok(())
    }

    async fn with_photos(&self, user: User) -> AppResult<ProfileWithPhotos> {
        let mut photos = self.users.list_photos(user.id).await?;
        sort_photos_for_display(&mut photos);
        Ok(ProfileWithPhotos { user, photos })
    }
}
