//! Direct messaging and conversation presentation.

pub mod service;
pub mod view;

pub use service::ConversationService;
pub use view::{ConversationView, DayGroup, MessageView};
