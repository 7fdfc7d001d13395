//! # sangam-api
//!
//! HTTP API layer for Sangam, built on Axum. Routes, middleware,
//! request/response DTOs, and the WebSocket upgrade live here; business
//! rules stay in `sangam-service`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
