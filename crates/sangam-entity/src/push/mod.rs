//! Browser push subscriptions.

pub mod subscription;

pub use subscription::PushSubscription;
