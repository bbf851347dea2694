//! Quiz store port
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`QuizStore`] - defined here in the application layer
//! - **Adapter**: `SqliteQuizStore` - implemented in the infrastructure layer
//!
//! Field-level constraints (non-empty question and answer, unique question)
//! are enforced inside the adapters and surfaced as
//! [`StoreError::Validation`] carrying one message per violated field.

use async_trait::async_trait;
use quiz_domain::{Quiz, QuizDraft};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by quiz store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// One message per violated field constraint.
    #[error("the quiz is invalid")]
    Validation(Vec<String>),

    #[error("storage error: {0}")]
    Connection(String),
}

/// Repository contract for quizzes.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Fetch every persisted quiz, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the backend cannot be reached.
    async fn list(&self) -> Result<Vec<Quiz>, StoreError>;

    /// Fetch one quiz by id, or `None` if no such record exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the backend cannot be reached.
    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, StoreError>;

    /// Persist a new quiz, assigning its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when a field constraint is
    /// violated, with one message per field.
    async fn create(&self, draft: &QuizDraft) -> Result<Quiz, StoreError>;

    /// Persist changed question and answer for an existing quiz.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when a field constraint is
    /// violated.
    async fn update(&self, quiz: &Quiz) -> Result<Quiz, StoreError>;

    /// Delete by id, returning the number of rows affected.
    ///
    /// Deleting a nonexistent id is not an error; it reports zero rows.
    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}

/// Check the non-emptiness constraints shared by every adapter.
///
/// Returns one message per violated field, empty when the draft is valid.
/// Uniqueness of the question is backend-specific and checked separately.
pub fn validate_draft(question: &str, answer: &str) -> Vec<String> {
    let mut messages = Vec::new();
    if question.trim().is_empty() {
        messages.push("the question cannot be empty".to_string());
    }
    if answer.trim().is_empty() {
        messages.push("the answer cannot be empty".to_string());
    }
    messages
}

/// Simple in-memory store implementation for testing and prototyping.
///
/// Enforces the same field constraints as the SQLite adapter.
#[derive(Clone, Default)]
pub struct InMemoryQuizStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    quizzes: Vec<Quiz>,
    next_id: i64,
}

impl InMemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with fixed quizzes, assigning sequential ids.
    pub fn with_quizzes(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("store lock");
            for (question, answer) in pairs {
                inner.next_id += 1;
                let id = inner.next_id;
                inner.quizzes.push(Quiz::new(id, *question, *answer));
            }
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.lock()?.quizzes.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, StoreError> {
        Ok(self.lock()?.quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, draft: &QuizDraft) -> Result<Quiz, StoreError> {
        let mut messages = validate_draft(&draft.question, &draft.answer);
        let mut inner = self.lock()?;
        if inner.quizzes.iter().any(|q| q.question == draft.question) {
            messages.push("this question already exists".to_string());
        }
        if !messages.is_empty() {
            return Err(StoreError::Validation(messages));
        }
        inner.next_id += 1;
        let quiz = Quiz::new(inner.next_id, draft.question.clone(), draft.answer.clone());
        inner.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: &Quiz) -> Result<Quiz, StoreError> {
        let mut messages = validate_draft(&quiz.question, &quiz.answer);
        let mut inner = self.lock()?;
        if inner
            .quizzes
            .iter()
            .any(|q| q.id != quiz.id && q.question == quiz.question)
        {
            messages.push("this question already exists".to_string());
        }
        if !messages.is_empty() {
            return Err(StoreError::Validation(messages));
        }
        match inner.quizzes.iter_mut().find(|q| q.id == quiz.id) {
            Some(slot) => {
                *slot = quiz.clone();
                Ok(quiz.clone())
            }
            None => Err(StoreError::Connection(format!(
                "no row updated for id={}",
                quiz.id
            ))),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.lock()?;
        let before = inner.quizzes.len();
        inner.quizzes.retain(|q| q.id != id);
        Ok((before - inner.quizzes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_draft_reports_each_empty_field() {
        assert!(validate_draft("q", "a").is_empty());
        assert_eq!(validate_draft("  ", "a").len(), 1);
        assert_eq!(validate_draft("", "").len(), 2);
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryQuizStore::new();
        let first = store
            .create(&QuizDraft::new("Capital of Italy", "Roma"))
            .await
            .unwrap();
        let second = store
            .create(&QuizDraft::new("Capital of France", "Paris"))
            .await
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_questions() {
        let store = InMemoryQuizStore::with_quizzes(&[("Capital of Italy", "Roma")]);
        let err = store
            .create(&QuizDraft::new("Capital of Italy", "Rome"))
            .await
            .unwrap_err();
        match err {
            StoreError::Validation(messages) => {
                assert_eq!(messages, vec!["this question already exists"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let store = InMemoryQuizStore::with_quizzes(&[("Q", "A")]);
        assert_eq!(store.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(1).await.unwrap(), 0);
    }
}
