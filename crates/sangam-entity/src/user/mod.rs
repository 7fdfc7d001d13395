//! User aggregate: profile, photos, and account status.

pub mod model;
pub mod status;

pub use model::{sort_photos_for_display, CreateUser, Photo, UpdateProfile, User};
pub use status::UserStatus;
