//! Browser push subscriptions and delivery.

pub mod delivery;
pub mod service;

pub use delivery::{PushDelivery, PushPayload};
pub use service::PushService;
