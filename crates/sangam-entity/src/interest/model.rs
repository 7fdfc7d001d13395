//! Interest entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::InterestStatus;

/// A directed interest request from one user to another.
///
/// At most one interest exists per ordered (from_user, to_user) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interest {
    /// Unique interest identifier.
    pub id: Uuid,
    /// The sender.
    pub from_user: Uuid,
    /// The recipient, who alone may accept or reject.
    pub to_user: Uuid,
    /// Current lifecycle state.
    pub status: InterestStatus,
    /// Optional note attached by the sender.
    pub message: Option<String>,
    /// When the interest was sent.
    pub created_at: DateTime<Utc>,
    /// When the recipient decided, if decided.
    pub responded_at: Option<DateTime<Utc>>,
}

impl Interest {
    /// Whether this interest can still be responded to.
    pub fn is_pending(&self) -> bool {
        self.status == InterestStatus::Pending
    }
}
