//! Community questions and answers.

pub mod service;

pub use service::{QuestionService, QuestionWithAnswers};
