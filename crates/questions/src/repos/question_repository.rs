//! Question repository over the questions collection.

use std::time::Duration;

use chrono::Utc;
use docdesk_store::Store;
use docdesk_users::SessionRepository;
use tracing::{info, warn};

use crate::entities::{Answer, CreateQuestionRequest, Question, QuestionStatus};
use crate::types::{QuestionError, QuestionResult};

/// Storage key of the questions collection.
pub const QUESTIONS_COLLECTION: &str = "docdesk_questions";

const LIST_DELAY: Duration = Duration::from_millis(700);
const FETCH_DELAY: Duration = Duration::from_millis(500);
const CREATE_DELAY: Duration = Duration::from_millis(1000);
const WRITE_DELAY: Duration = Duration::from_millis(800);

/// Repository for question board operations.
///
/// Asking and answering require an active session. Answers are append-only
/// and a question that gained an answer never reverts to unanswered.
#[derive(Clone)]
pub struct QuestionRepository {
    store: Store,
    sessions: SessionRepository,
}

impl QuestionRepository {
    pub fn new(store: Store) -> Self {
        let sessions = SessionRepository::new(store.clone());
        Self { store, sessions }
    }

    /// List all questions.
    pub async fn list(&self) -> QuestionResult<Vec<Question>> {
        self.store.latency().simulate(LIST_DELAY).await;
        Ok(self.store.load_collection(QUESTIONS_COLLECTION)?)
    }

    /// Fetch a question by id.
    pub async fn get(&self, id: &str) -> QuestionResult<Question> {
        self.store.latency().simulate(FETCH_DELAY).await;

        let questions: Vec<Question> = self.store.load_collection(QUESTIONS_COLLECTION)?;
        questions
            .into_iter()
            .find(|question| question.id == id)
            .ok_or(QuestionError::NotFound)
    }

    /// Ask a new question on behalf of the current session's user.
    ///
    /// The stored question always starts unanswered with no answers; the
    /// request carries no fields that could say otherwise.
    pub async fn create(&self, request: CreateQuestionRequest) -> QuestionResult<Question> {
        self.store.latency().simulate(CREATE_DELAY).await;

        let asker = self
            .sessions
            .current()?
            .ok_or(QuestionError::Unauthenticated)?;
        request.validate().map_err(QuestionError::Validation)?;

        let mut questions: Vec<Question> = self.store.load_collection(QUESTIONS_COLLECTION)?;

        let question = Question {
            id: cuid2::create_id(),
            title: request.title,
            content: request.content,
            asked_by: asker.id,
            asked_at: Utc::now().to_rfc3339(),
            status: QuestionStatus::Unanswered,
            document_id: request.document_id,
            answers: Vec::new(),
        };

        questions.push(question.clone());
        self.store.save_collection(QUESTIONS_COLLECTION, &questions)?;

        info!(question = %question.id, title = %question.title, "created question");
        Ok(question)
    }

    /// Append an answer to a question and mark it answered.
    ///
    /// The answer lands at the end of the existing sequence and the status
    /// transition is one-directional: there is no way back to unanswered.
    pub async fn add_answer(&self, question_id: &str, content: &str) -> QuestionResult<Question> {
        self.store.latency().simulate(WRITE_DELAY).await;

        let answerer = self
            .sessions
            .current()?
            .ok_or(QuestionError::Unauthenticated)?;

        if content.trim().is_empty() {
            return Err(QuestionError::Validation(
                "Answer content cannot be empty".to_string(),
            ));
        }

        let mut questions: Vec<Question> = self.store.load_collection(QUESTIONS_COLLECTION)?;
        let index = questions
            .iter()
            .position(|question| question.id == question_id)
            .ok_or(QuestionError::NotFound)?;

        let question = &mut questions[index];
        question.answers.push(Answer {
            id: cuid2::create_id(),
            content: content.to_string(),
            answered_by: answerer.id,
            answered_at: Utc::now().to_rfc3339(),
        });
        question.status = QuestionStatus::Answered;
        let updated = question.clone();

        self.store.save_collection(QUESTIONS_COLLECTION, &questions)?;

        info!(question = %updated.id, answers = updated.answers.len(), "answered question");
        Ok(updated)
    }

    /// Delete a question together with its answers.
    pub async fn delete(&self, id: &str) -> QuestionResult<()> {
        self.store.latency().simulate(WRITE_DELAY).await;

        let mut questions: Vec<Question> = self.store.load_collection(QUESTIONS_COLLECTION)?;
        let before = questions.len();
        questions.retain(|question| question.id != id);
        if questions.len() == before {
            return Err(QuestionError::NotFound);
        }

        self.store.save_collection(QUESTIONS_COLLECTION, &questions)?;

        warn!(question = %id, "deleted question");
        Ok(())
    }
}
