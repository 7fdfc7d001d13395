//! Profile view repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_entity::profile_view::ProfileView;

/// Repository for "who viewed my profile" records.
#[derive(Debug, Clone)]
pub struct ProfileViewRepository {
    pool: PgPool,
}

impl ProfileViewRepository {
    /// Create a new profile view repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a view event.
    pub async fn record(
        &self,
        viewer_id: Uuid,
        viewed_user_id: Uuid,
        has_messaged: bool,
    ) -> AppResult<ProfileView> {
        sqlx::query_as::<_, ProfileView>(
            "INSERT INTO profile_views (viewer_id, viewed_user_id, has_messaged) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(viewer_id)
        .bind(viewed_user_id)
        .bind(has_messaged)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record profile view", e)
        })
    }

    /// Views received by a user, most recent first.
    pub async fn list_for_user(
        &self,
        viewed_user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ProfileView>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM profile_views WHERE viewed_user_id = $1")
                .bind(viewed_user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count profile views", e)
                })?;

        let views = sqlx::query_as::<_, ProfileView>(
            "SELECT * FROM profile_views WHERE viewed_user_id = $1 \
             ORDER BY viewed_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(viewed_user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list profile views", e)
        })?;

        Ok(PageResponse::new(
            views,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Whether the viewer already has a view recorded for this profile today.
    pub async fn viewed_today(&self, viewer_id: Uuid, viewed_user_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM profile_views \
                WHERE viewer_id = $1 AND viewed_user_id = $2 \
                  AND viewed_at >= date_trunc('day', NOW()))",
        )
        .bind(viewer_id)
        .bind(viewed_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check profile views", e)
        })
    }
}
