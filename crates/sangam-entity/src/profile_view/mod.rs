//! Profile view events ("who viewed me").

pub mod model;

pub use model::ProfileView;
