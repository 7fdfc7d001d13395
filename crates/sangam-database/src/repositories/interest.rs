//! Interest repository implementation.
//!
//! The pending-to-decided transition is a single guarded UPDATE, so the
//! state machine is atomic at the row level without application locking.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_entity::interest::{Interest, InterestStatus};

/// Repository for interest requests.
#[derive(Debug, Clone)]
pub struct InterestRepository {
    pool: PgPool,
}

impl InterestRepository {
    /// Create a new interest repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pending interest for the ordered (from, to) pair.
    ///
    /// The unique constraint on the pair turns a duplicate send into a
    /// Conflict error.
    pub async fn create(
        &self,
        from_user: Uuid,
        to_user: Uuid,
        message: Option<&str>,
    ) -> AppResult<Interest> {
        sqlx::query_as::<_, Interest>(
            "INSERT INTO interests (from_user, to_user, message) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(from_user)
        .bind(to_user)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An interest already exists for this user")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create interest", e),
        })
    }

    /// Find an interest by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Interest>> {
        sqlx::query_as::<_, Interest>("SELECT * FROM interests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find interest", e))
    }

    /// Find the interest for an ordered (from, to) pair.
    pub async fn find_pair(&self, from_user: Uuid, to_user: Uuid) -> AppResult<Option<Interest>> {
        sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE from_user = $1 AND to_user = $2",
        )
        .bind(from_user)
        .bind(to_user)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find interest", e))
    }

    /// Decide a pending interest.
    ///
    /// Returns `None` when no pending interest matched, which covers both
    /// a missing interest and one that was already decided.
    pub async fn decide(
        &self,
        id: Uuid,
        to_user: Uuid,
        decision: InterestStatus,
    ) -> AppResult<Option<Interest>> {
        sqlx::query_as::<_, Interest>(
            "UPDATE interests SET status = $3, responded_at = NOW() \
             WHERE id = $1 AND to_user = $2 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(to_user)
        .bind(decision)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to decide interest", e))
    }

    /// Interests received by a user, newest first.
    pub async fn list_incoming(
        &self,
        to_user: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Interest>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interests WHERE to_user = $1")
            .bind(to_user)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count interests", e)
            })?;

        let interests = sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE to_user = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(to_user)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list interests", e))?;

        Ok(PageResponse::new(
            interests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Interests sent by a user, newest first.
    pub async fn list_outgoing(
        &self,
        from_user: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Interest>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interests WHERE from_user = $1")
            .bind(from_user)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count interests", e)
            })?;

        let interests = sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE from_user = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(from_user)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list interests", e))?;

        Ok(PageResponse::new(
            interests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
