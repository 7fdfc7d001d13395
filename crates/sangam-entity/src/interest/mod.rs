//! Interest aggregate: directed match requests with accept/reject.

pub mod model;
pub mod status;

pub use model::Interest;
pub use status::InterestStatus;
