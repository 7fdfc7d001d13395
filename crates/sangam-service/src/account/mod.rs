//! Account registration, login, and token refresh.

pub mod service;

pub use service::{AccountService, AuthTokens, RegisterAccount};
