//! Notification storage, listing, and event fan-out.

pub mod fanout;
pub mod service;

pub use fanout::Notifier;
pub use service::NotificationService;
