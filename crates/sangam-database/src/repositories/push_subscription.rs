//! Push subscription repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_entity::push::PushSubscription;

/// Repository for browser push subscriptions.
#[derive(Debug, Clone)]
pub struct PushSubscriptionRepository {
    pool: PgPool,
}

impl PushSubscriptionRepository {
    /// Create a new push subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a subscription, refreshing keys for a known endpoint.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        endpoint: &str,
        key_p256dh: &str,
        key_auth: &str,
    ) -> AppResult<PushSubscription> {
        sqlx::query_as::<_, PushSubscription>(
            "INSERT INTO push_subscriptions (user_id, endpoint, key_p256dh, key_auth) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, endpoint) \
             DO UPDATE SET key_p256dh = EXCLUDED.key_p256dh, key_auth = EXCLUDED.key_auth \
             RETURNING *",
        )
        .bind(user_id)
        .bind(endpoint)
        .bind(key_p256dh)
        .bind(key_auth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to save push subscription", e)
        })
    }

    /// All subscriptions registered by a user.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<PushSubscription>> {
        sqlx::query_as::<_, PushSubscription>(
            "SELECT * FROM push_subscriptions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list push subscriptions", e)
        })
    }

    /// Remove a subscription by endpoint, scoped to its owner.
    pub async fn delete_by_endpoint(&self, user_id: Uuid, endpoint: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM push_subscriptions WHERE user_id = $1 AND endpoint = $2",
        )
        .bind(user_id)
        .bind(endpoint)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete push subscription", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a subscription whose endpoint the push service rejected.
    pub async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete push subscription", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
