//! # Docdesk Questions Crate
//!
//! Question and answer board for the Docdesk core: the [`Question`] and
//! [`Answer`] entities and the [`QuestionRepository`] CRUD surface with its
//! append-only answer operation. A question's status always reflects
//! whether it has answers, and the unanswered → answered transition is
//! one-directional.

pub mod entities;
pub mod repos;
pub mod types;

pub use entities::{Answer, CreateQuestionRequest, Question, QuestionStatus};
pub use repos::{QuestionRepository, QUESTIONS_COLLECTION};
pub use types::{QuestionError, QuestionResult};
