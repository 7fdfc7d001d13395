//! HTTP and WebSocket handlers, one module per API surface.

pub mod auth;
pub mod health;
pub mod interest;
pub mod message;
pub mod notification;
pub mod photo;
pub mod profile;
pub mod push;
pub mod question;
pub mod ws;
