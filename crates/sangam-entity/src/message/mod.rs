//! Message aggregate: two-party direct messages.

pub mod model;

pub use model::{ConversationSummary, Message, MAX_MESSAGE_LENGTH};
