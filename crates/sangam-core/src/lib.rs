//! Core building blocks shared by every Sangam crate.
//!
//! Contains the unified error type, the configuration schema, common
//! request/response types, and the file-store trait implemented in
//! `sangam-storage`.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
