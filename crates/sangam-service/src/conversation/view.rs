//! Conversation presentation: day grouping and timestamp collapsing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use sangam_entity::message::Message;

/// Consecutive messages from the same sender within this window share
/// one visible timestamp.
pub const TIMESTAMP_COLLAPSE_MINUTES: i64 = 5;

/// A single message prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    /// Message ID.
    pub id: Uuid,
    /// Sending user.
    pub sender_id: Uuid,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
    /// Whether the receiver has read it.
    pub is_read: bool,
    /// Whether the viewer sent this message.
    pub mine: bool,
    /// Whether the client should render a timestamp for this message.
    pub show_timestamp: bool,
}

/// Messages sent on one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    /// The UTC calendar day.
    pub date: NaiveDate,
    /// Messages of that day, oldest first.
    pub messages: Vec<MessageView>,
}

/// A conversation page prepared for display, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationView {
    /// Day groups in chronological order.
    pub days: Vec<DayGroup>,
}

/// Builds the display form of a conversation page.
///
/// Input is newest-first as the repository returns it; output is
/// oldest-first, grouped by UTC calendar day. Within a day, a message
/// shows its timestamp unless the previous message came from the same
/// sender within the collapse window.
pub fn build_view(mut messages: Vec<Message>, viewer: Uuid) -> ConversationView {
    messages.reverse();

    let mut days: Vec<DayGroup> = Vec::new();
    for message in messages {
        let date = message.created_at.date_naive();
        if days.last().map(|d| d.date) != Some(date) {
            days.push(DayGroup {
                date,
                messages: Vec::new(),
            });
        }

        let group = days.last_mut().expect("day group just pushed");
        let show_timestamp = match group.messages.last() {
            None => true,
            Some(prev) => {
                prev.sender_id != message.sender_id
                    || message.created_at - prev.created_at
                        > chrono::Duration::minutes(TIMESTAMP_COLLAPSE_MINUTES)
            }
        };

        group.messages.push(MessageView {
            id: message.id,
            sender_id: message.sender_id,
            mine: message.sender_id == viewer,
            content: message.content,
            created_at: message.created_at,
            is_read: message.is_read,
            show_timestamp,
        });
    }

    ConversationView { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn msg(sender: Uuid, receiver: Uuid, at: DateTime<Utc>) -> Message {
        Message {
            id: Uuid::new_v4(),
            sender_id: sender,
            receiver_id: receiver,
            content: "hello".to_string(),
            is_read: false,
            created_at: at,
            read_at: None,
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn oldest_first_across_day_groups() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // Repository order: newest first.
        let messages = vec![
            msg(b, a, at(2, 9, 0)),
            msg(a, b, at(1, 22, 0)),
            msg(a, b, at(1, 21, 0)),
        ];

        let view = build_view(messages, a);
        assert_eq!(view.days.len(), 2);
        assert_eq!(view.days[0].date, at(1, 0, 0).date_naive());
        assert_eq!(view.days[0].messages.len(), 2);
        assert!(view.days[0].messages[0].created_at < view.days[0].messages[1].created_at);
        assert_eq!(view.days[1].messages.len(), 1);
        assert!(!view.days[1].messages[0].mine);
    }

    #[test]
    fn same_sender_within_window_collapses_timestamp() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let messages = vec![
            msg(a, b, at(1, 10, 4)),
            msg(a, b, at(1, 10, 2)),
            msg(a, b, at(1, 10, 0)),
        ];

        let view = build_view(messages, a);
        let shown: Vec<bool> = view.days[0]
            .messages
            .iter()
            .map(|m| m.show_timestamp)
            .collect();
        assert_eq!(shown, vec![true, false, false]);
    }

    #[test]
    fn sender_change_or_gap_shows_timestamp() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let messages = vec![
            msg(a, b, at(1, 10, 20)), // same sender, 10 min gap
            msg(a, b, at(1, 10, 10)), // sender change
            msg(b, a, at(1, 10, 8)),  // same sender within window
            msg(b, a, at(1, 10, 5)),  // first of day
        ];

        let view = build_view(messages, a);
        let shown: Vec<bool> = view.days[0]
            .messages
            .iter()
            .map(|m| m.show_timestamp)
            .collect();
        assert_eq!(shown, vec![true, false, true, true]);
    }

    #[test]
    fn boundary_gap_of_exactly_five_minutes_collapses() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let messages = vec![msg(a, b, at(1, 10, 5)), msg(a, b, at(1, 10, 0))];

        let view = build_view(messages, a);
        assert!(!view.days[0].messages[1].show_timestamp);
    }

    #[test]
    fn empty_conversation_has_no_days() {
        let view = build_view(Vec::new(), Uuid::new_v4());
        assert!(view.days.is_empty());
    }
}
