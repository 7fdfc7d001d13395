//! Persistent domain models for the Sangam platform.
//!
//! Each module maps to one database aggregate. All structs derive
//! `sqlx::FromRow` and are returned directly from the repositories in
//! `sangam-database`.

pub mod interest;
pub mod message;
pub mod notification;
pub mod profile_view;
pub mod push;
pub mod question;
pub mod user;
