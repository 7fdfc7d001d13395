//! Answer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An answer to a community question.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    /// Unique answer identifier.
    pub id: Uuid,
    /// The question being answered.
    pub question_id: Uuid,
    /// The answering user.
    pub author_id: Uuid,
    /// Answer body.
    pub content: String,
    /// Upvote count.
    pub upvotes: i32,
    /// Downvote count.
    pub downvotes: i32,
    /// When the answer was posted.
    pub created_at: DateTime<Utc>,
}
