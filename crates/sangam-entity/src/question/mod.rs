//! Question aggregate: community Q&A posts, answers, and votes.

pub mod answer;
pub mod model;

pub use answer::Answer;
pub use model::Question;
