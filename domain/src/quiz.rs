//! Quiz entity and answer matching

use serde::{Deserialize, Serialize};

/// A persisted trivia question.
///
/// The id is assigned by the storage layer on creation and never changes.
/// Storage also guarantees that `question` is unique and that both text
/// fields are non-empty; the core never invents an id, every id it puts
/// into a `Quiz` was taken from a store-returned record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

impl Quiz {
    pub fn new(id: i64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl std::fmt::Display for Quiz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.question, self.answer)
    }
}

/// An unsaved quiz candidate, built from interactive input.
///
/// Field constraints (non-empty text, unique question) are enforced by the
/// storage layer when the draft is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Compare a given answer against the expected one.
///
/// Both sides are trimmed and lowercased first, so `" Roma "` matches
/// `"roma"`. An empty given answer only matches an empty expected answer,
/// which storage never persists.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
