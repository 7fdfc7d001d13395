//! Repository implementations, one per aggregate.

pub mod interest;
pub mod message;
pub mod notification;
pub mod profile_view;
pub mod push_subscription;
pub mod question;
pub mod user;
