//! Domain entities for the question board.

pub mod question;

pub use question::{Answer, CreateQuestionRequest, Question, QuestionStatus};
