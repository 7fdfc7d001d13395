//! Cross-crate trait seams.

pub mod store;
