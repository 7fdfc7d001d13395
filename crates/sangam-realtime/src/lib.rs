//! # sangam-realtime
//!
//! WebSocket hint channel for Sangam. Connected clients receive small
//! advisory nudges ("you have a new message") and are expected to
//! re-fetch through the HTTP API; the hint itself carries no state a
//! client must not miss, so delivery is best effort.

pub mod message;
pub mod registry;
pub mod server;

pub use message::Hint;
pub use registry::{ConnectionHandle, ConnectionRegistry};
pub use server::RealtimeEngine;
