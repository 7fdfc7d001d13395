//! Hint messages pushed to connected clients.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sangam_entity::notification::NotificationKind;

/// An advisory nudge sent over the WebSocket hint channel.
///
/// Hints tell the client which surface is stale; the client re-fetches
/// through the HTTP API. A missed hint is recovered by regular polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Hint {
    /// A notification was created for this user.
    Notification {
        /// The stored notification ID.
        notification_id: Uuid,
        /// What kind of event produced it.
        kind: NotificationKind,
    },
    /// A direct message arrived.
    Message {
        /// The sending user.
        from_user: Uuid,
    },
    /// An interest arrived or was decided.
    Interest {
        /// The interest record ID.
        interest_id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_wire_format() {
        let hint = Hint::Message {
            from_user: Uuid::nil(),
        };
        let json = serde_json::to_string(&hint).unwrap();
        assert!(json.contains("\"type\":\"message\""));
        assert!(json.contains("from_user"));
    }
}
