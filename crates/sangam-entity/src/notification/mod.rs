//! Notification aggregate: stored platform events awaiting attention.

pub mod kind;
pub mod model;

pub use kind::NotificationKind;
pub use model::Notification;
