//! Notification event kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The platform event that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone sent the user an interest request.
    InterestReceived,
    /// A previously sent interest was accepted.
    InterestAccepted,
    /// A new direct message arrived.
    MessageReceived,
    /// Someone viewed the user's profile.
    ProfileViewed,
    /// Someone answered the user's question.
    AnswerPosted,
}

impl NotificationKind {
    /// Stable string form stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InterestReceived => "interest_received",
            Self::InterestAccepted => "interest_accepted",
            Self::MessageReceived => "message_received",
            Self::ProfileViewed => "profile_viewed",
            Self::AnswerPosted => "answer_posted",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_form_matches_as_str() {
        let json = serde_json::to_string(&NotificationKind::InterestAccepted).unwrap();
        assert_eq!(json, "\"interest_accepted\"");
    }
}
