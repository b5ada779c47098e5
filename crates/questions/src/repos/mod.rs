//! Data access layer for the question board.

pub mod question_repository;

pub use question_repository::{QuestionRepository, QUESTIONS_COLLECTION};
