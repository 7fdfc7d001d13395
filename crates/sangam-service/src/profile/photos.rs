//! Profile photo upload and management.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::traits::store::FileStore;
use sangam_database::repositories::user::UserRepository;
use sangam_entity::user::{Photo, sort_photos_for_display};

use crate::context::RequestContext;

/// Maximum number of photos per profile.
const MAX_PHOTOS_PER_USER: i64 = 10;

/// Manages profile photo uploads.
#[derive(Debug, Clone)]
pub struct PhotoService {
    users: Arc<UserRepository>,
    store: Arc<dyn FileStore>,
    max_upload_size_bytes: u64,
}

impl PhotoService {
    /// Creates a new photo service.
    pub fn new(users: Arc<UserRepository>, store: Arc<dyn FileStore>, max_upload_size_bytes: u64) -> Self {
        Self {
            users,
            store,
            max_upload_size_bytes,
        }
    }

    /// Uploads a photo for the current user.
    ///
    /// The first photo a user uploads becomes their primary photo.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        data: Bytes,
        filename: &str,
    ) -> AppResult<Photo> {
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Upload exceeds the {} byte limit",
                self.max_upload_size_bytes
            )));
        }

        let count = self.users.count_photos(ctx.user_id).await?;
        if count >= MAX_PHOTOS_PER_USER {
            return Err(AppError::conflict(format!(
                "At most {MAX_PHOTOS_PER_USER} photos are allowed per profile"
            )));
        }

        let stored = self.store.upload(data, filename, ctx.user_id).await?;

        let position = self
            .users
            .max_photo_position(ctx.user_id)
            .await?
            .map(|p| p + 1)
            .unwrap_or(0);

        let photo = self
            .users
            .add_photo(ctx.user_id, &stored.path, &stored.url, position)
            .await?;

        let photo = if count == 0 {
            self.users.set_primary_photo(photo.id, ctx.user_id).await?
        } else {
            photo
        };

        info!(user_id = %ctx.user_id, photo_id = %photo.id, "Photo uploaded");
        Ok(photo)
    }

    /// Lists the current user's photos, primary first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Photo>> {
        let mut photos = self.users.list_photos(ctx.user_id).await?;
        sort_photos_for_display(&mut photos);
        Ok(photos)
    }

    /// Deletes one of the current user's photos.
    ///
    /// The database row is removed first; a stale file on disk is only
    /// logged, never surfaced.
    pub async fn delete(&self, ctx: &RequestContext, photo_id: Uuid) -> AppResult<()> {
        let photo = self
            .users
            .delete_photo(photo_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Photo not found"))?;

        if let Err(e) = self.store.delete(&photo.path).await {
            warn!(photo_id = %photo.id, path = %photo.path, error = %e, "Failed to delete photo file");
        }

        info!(user_id = %ctx.user_id, photo_id = %photo.id, "Photo deleted");
        Ok(())
    }

    /// Marks one of the current user's photos as primary.
    pub async fn set_primary(&self, ctx: &RequestContext, photo_id: Uuid) -> AppResult<Photo> {
        let photo = self.users.set_primary_photo(photo_id, ctx.user_id).await?;
        info!(user_id = %ctx.user_id, photo_id = %photo.id, "Primary photo set");
        Ok(photo)
    }
}
