use serde::{Deserialize, Serialize};

/// Represents a question on the Q&A board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable identifier, generated at creation time
    pub id: String,
    /// Question title
    pub title: String,
    /// Question body
    pub content: String,
    /// Id of the asking user
    pub asked_by: String,
    /// Timestamp the question was asked (RFC3339)
    pub asked_at: String,
    /// Derived status: answered iff at least one answer exists
    pub status: QuestionStatus,
    /// Associated document, if the question refers to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Answers in insertion order (append-only)
    pub answers: Vec<Answer>,
}

/// Represents an answer, owned exclusively by its parent question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Stable identifier
    pub id: String,
    /// Answer body
    pub content: String,
    /// Id of the answering user
    pub answered_by: String,
    /// Timestamp the answer was given (RFC3339)
    pub answered_at: String,
}

/// Question status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Unanswered,
    Answered,
}

impl From<&str> for QuestionStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "answered" => QuestionStatus::Answered,
            _ => QuestionStatus::Unanswered,
        }
    }
}

impl From<QuestionStatus> for String {
    fn from(status: QuestionStatus) -> Self {
        match status {
            QuestionStatus::Unanswered => "unanswered".to_string(),
            QuestionStatus::Answered => "answered".to_string(),
        }
    }
}

impl Question {
    /// Whether the stored status matches the answer sequence.
    pub fn status_is_consistent(&self) -> bool {
        match self.status {
            QuestionStatus::Unanswered => self.answers.is_empty(),
            QuestionStatus::Answered => !self.answers.is_empty(),
        }
    }
}

/// Request to ask a new question.
///
/// Status, answers, asker, and timestamp are server-authoritative: the
/// request deliberately has no fields for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    /// Question title
    pub title: String,
    /// Question body
    pub content: String,
    /// Associated document (optional)
    pub document_id: Option<String>,
}

impl CreateQuestionRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        if self.title.len() > 200 {
            return Err("Title too long (max 200 characters)".to_string());
        }

        if self.content.trim().is_empty() {
            return Err("Content cannot be empty".to_string());
        }

        Ok(())
    }
}
