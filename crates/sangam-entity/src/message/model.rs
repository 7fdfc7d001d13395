//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maximum message content length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// A direct message between two users.
///
/// Content is immutable once created; only `is_read`/`read_at` may change,
/// and only via the receiver's mark-read action (false to true).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// The sending user.
    pub sender_id: Uuid,
    /// The receiving user.
    pub receiver_id: Uuid,
    /// Message body.
    pub content: String,
    /// Whether the receiver has read this message.
    pub is_read: bool,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
    /// When the receiver read the message.
    pub read_at: Option<DateTime<Utc>>,
}

impl Message {
    /// The counterpart of `user` in this message, if `user` is a party.
    pub fn counterpart_of(&self, user: Uuid) -> Option<Uuid> {
        if self.sender_id == user {
            Some(self.receiver_id)
        } else if self.receiver_id == user {
            Some(self.sender_id)
        } else {
            None
        }
    }
}

/// One row in the conversation inbox: the latest message exchanged with a
/// counterpart plus the number of unread messages from them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConversationSummary {
    /// The other party.
    pub counterpart_id: Uuid,
    /// The other party's display name.
    pub counterpart_name: Option<String>,
    /// Latest message body in the conversation.
    pub last_content: String,
    /// Who sent the latest message.
    pub last_sender_id: Uuid,
    /// When the latest message was sent.
    pub last_created_at: DateTime<Utc>,
    /// Count of unread messages from the counterpart.
    pub unread_count: i64,
}
