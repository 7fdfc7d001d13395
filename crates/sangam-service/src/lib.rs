//! # sangam-service
//!
//! Business logic service layer for Sangam. Each service orchestrates
//! repositories, storage, and notification fan-out to implement
//! application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod conversation;
pub mod interest;
pub mod notification;
pub mod profile;
pub mod push;
pub mod question;

pub use account::AccountService;
pub use context::RequestContext;
pub use conversation::ConversationService;
pub use interest::InterestService;
pub use notification::{NotificationService, Notifier};
pub use profile::{PhotoService, ProfileService};
pub use push::{PushDelivery, PushService};
pub use question::QuestionService;
