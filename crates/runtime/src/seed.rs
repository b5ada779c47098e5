//! Bootstrap fixtures.
//!
//! The fixed built-in dataset written to an absent collection on first
//! access, so the system is usable without prior setup. The console's
//! `seed-data` command force-writes the same records.

use docdesk_documents::{Document, DocumentStatus};
use docdesk_questions::{Answer, Question, QuestionStatus};
use docdesk_users::{Role, User};

pub fn bootstrap_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            avatar: Some(User::placeholder_avatar("admin")),
        },
        User {
            id: "2".to_string(),
            name: "Editor User".to_string(),
            email: "editor@example.com".to_string(),
            role: Role::Editor,
            avatar: Some(User::placeholder_avatar("editor")),
        },
        User {
            id: "3".to_string(),
            name: "Viewer User".to_string(),
            email: "viewer@example.com".to_string(),
            role: Role::Viewer,
            avatar: Some(User::placeholder_avatar("viewer")),
        },
    ]
}

pub fn bootstrap_documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".to_string(),
            title: "Getting Started Guide".to_string(),
            content: "This is a guide to help you get started with our system.".to_string(),
            created_by: "1".to_string(),
            created_at: "2024-04-01T10:00:00Z".to_string(),
            updated_at: "2024-04-01T10:00:00Z".to_string(),
            doc_type: "pdf".to_string(),
            size: 1024,
            status: DocumentStatus::Published,
        },
        Document {
            id: "2".to_string(),
            title: "API Documentation".to_string(),
            content: "Comprehensive API documentation for developers.".to_string(),
            created_by: "2".to_string(),
            created_at: "2024-04-02T14:30:00Z".to_string(),
            updated_at: "2024-04-03T09:15:00Z".to_string(),
            doc_type: "docx".to_string(),
            size: 2048,
            status: DocumentStatus::Published,
        },
        Document {
            id: "3".to_string(),
            title: "Internal Processes".to_string(),
            content: "Documentation of internal company processes.".to_string(),
            created_by: "1".to_string(),
            created_at: "2024-04-05T16:20:00Z".to_string(),
            updated_at: "2024-04-10T11:45:00Z".to_string(),
            doc_type: "pdf".to_string(),
            size: 3072,
            status: DocumentStatus::Draft,
        },
    ]
}

pub fn bootstrap_questions() -> Vec<Question> {
    vec![
        Question {
            id: "1".to_string(),
            title: "How do I upload a new document?".to_string(),
            content: "I'm trying to upload a new document but can't find the right button."
                .to_string(),
            asked_by: "3".to_string(),
            asked_at: "2024-04-10T09:00:00Z".to_string(),
            status: QuestionStatus::Answered,
            document_id: None,
            answers: vec![Answer {
                id: "a1".to_string(),
                content: "Click on the '+ New Document' button in the top right of the documents page."
                    .to_string(),
                answered_by: "1".to_string(),
                answered_at: "2024-04-10T10:30:00Z".to_string(),
            }],
        },
        Question {
            id: "2".to_string(),
            title: "Can I change document permissions?".to_string(),
            content: "I need to restrict access to a specific document to certain users."
                .to_string(),
            asked_by: "2".to_string(),
            asked_at: "2024-04-11T14:20:00Z".to_string(),
            status: QuestionStatus::Unanswered,
            document_id: Some("2".to_string()),
            answers: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_emails_are_unique_case_insensitively() {
        let users = bootstrap_users();
        for (i, a) in users.iter().enumerate() {
            for b in users.iter().skip(i + 1) {
                assert!(!a.email.eq_ignore_ascii_case(&b.email));
            }
        }
    }

    #[test]
    fn fixture_roles_cover_every_tier() {
        let users = bootstrap_users();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.role == Role::Admin));
        assert!(users.iter().any(|u| u.role == Role::Editor));
        assert!(users.iter().any(|u| u.role == Role::Viewer));
    }

    #[test]
    fn fixture_documents_reference_fixture_users() {
        let users = bootstrap_users();
        for document in bootstrap_documents() {
            assert!(users.iter().any(|u| u.id == document.created_by));
        }
    }

    #[test]
    fn fixture_question_statuses_are_consistent() {
        for question in bootstrap_questions() {
            assert!(question.status_is_consistent(), "question {}", question.id);
        }
    }

    #[test]
    fn fixture_timestamps_are_ordered() {
        use chrono::DateTime;

        for document in bootstrap_documents() {
            let created = DateTime::parse_from_rfc3339(&document.created_at).unwrap();
            let updated = DateTime::parse_from_rfc3339(&document.updated_at).unwrap();
            assert!(updated >= created, "document {}", document.id);
        }
    }
}
