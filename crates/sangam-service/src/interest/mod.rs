//! Interest request lifecycle.

pub mod service;

pub use service::InterestService;
