//! Shared request/response types.

pub mod pagination;
pub mod response;
