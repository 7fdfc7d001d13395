//! Question entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A community Q&A question.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Unique question identifier.
    pub id: Uuid,
    /// The asking user.
    pub author_id: Uuid,
    /// Question title.
    pub title: String,
    /// Question body.
    pub content: String,
    /// Topic category.
    pub category: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Upvote count.
    pub upvotes: i32,
    /// Downvote count.
    pub downvotes: i32,
    /// View count.
    pub views: i64,
    /// Number of answers posted.
    pub answers_count: i32,
    /// When the question was asked.
    pub created_at: DateTime<Utc>,
    /// When the question was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Net vote score.
    pub fn score(&self) -> i32 {
        self.upvotes - self.downvotes
    }
}
