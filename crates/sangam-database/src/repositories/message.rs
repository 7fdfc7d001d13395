//! Message repository implementation.
//!
//! Conversation identity is the unordered (sender, receiver) pair; queries
//! normalize it with LEAST/GREATEST. The read flag only ever moves from
//! false to true, enforced by the `NOT is_read` guard in the UPDATE.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_entity::message::{ConversationSummary, Message};

/// Repository for direct messages.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new message.
    pub async fn create(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: &str,
    ) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, receiver_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// The most recent `limit` messages between two users, newest first.
    pub async fn conversation(
        &self,
        user_a: Uuid,
        user_b: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM messages \
             WHERE (sender_id = $1 AND receiver_id = $2) \
                OR (sender_id = $2 AND receiver_id = $1) \
             ORDER BY created_at DESC LIMIT $3",
        )
        .bind(user_a)
        .bind(user_b)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load conversation", e))
    }

    /// Mark all unread messages from `sender` to `receiver` as read.
    ///
    /// Returns the number of messages flipped. Already-read messages are
    /// untouched, so re-application is a no-op.
    pub async fn mark_conversation_read(&self, receiver: Uuid, sender: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE, read_at = NOW() \
             WHERE receiver_id = $1 AND sender_id = $2 AND NOT is_read",
        )
        .bind(receiver)
        .bind(sender)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark conversation read", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Count unread messages from `sender` addressed to `receiver`.
    pub async fn unread_count_from(&self, receiver: Uuid, sender: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages \
             WHERE receiver_id = $1 AND sender_id = $2 AND NOT is_read",
        )
        .bind(receiver)
        .bind(sender)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Total unread messages addressed to a user.
    pub async fn unread_total(&self, receiver: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND NOT is_read",
        )
        .bind(receiver)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Inbox listing: the latest message per counterpart plus the unread
    /// count from that counterpart, ordered by most recent activity.
    pub async fn list_conversations(&self, user: Uuid) -> AppResult<Vec<ConversationSummary>> {
        sqlx::query_as::<_, ConversationSummary>(
            "SELECT \
                 CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END AS counterpart_id, \
                 u.display_name AS counterpart_name, \
                 m.content AS last_content, \
                 m.sender_id AS last_sender_id, \
                 m.created_at AS last_created_at, \
                 (SELECT COUNT(*) FROM messages x \
                   WHERE x.receiver_id = $1 AND NOT x.is_read \
                     AND x.sender_id = CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END \
                 ) AS unread_count \
             FROM ( \
                 SELECT DISTINCT ON (LEAST(sender_id, receiver_id), GREATEST(sender_id, receiver_id)) * \
                 FROM messages \
                 WHERE sender_id = $1 OR receiver_id = $1 \
                 ORDER BY LEAST(sender_id, receiver_id), GREATEST(sender_id, receiver_id), created_at DESC \
             ) m \
             JOIN users u \
               ON u.id = CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END \
             ORDER BY m.created_at DESC",
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list conversations", e)
        })
    }

    /// Whether `sender` has ever messaged `receiver`.
    pub async fn has_messaged(&self, sender: Uuid, receiver: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM messages WHERE sender_id = $1 AND receiver_id = $2)",
        )
        .bind(sender)
        .bind(receiver)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check messages", e))
    }
}
