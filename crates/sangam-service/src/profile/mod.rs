//! Profile management, browsing, and photos.

pub mod photos;
pub mod service;

pub use photos::PhotoService;
pub use service::{ProfileService, ProfileWithPhotos};
