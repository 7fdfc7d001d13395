//! Storage backend implementations.

pub mod blob;
pub mod local;
