//! Command pipelines
//!
//! Every user-facing command follows the same shape: a straight-line
//! sequence of async steps where any failure short-circuits via `?` to the
//! shell driver's single error-reporting step. The driver then always
//! re-prompts, so no error propagates past one command invocation.

use crate::ports::interaction::InteractionPort;
use crate::ports::store::{QuizStore, StoreError};
use crate::use_cases::play::Verdict;
use quiz_domain::{IdError, Quiz, QuizDraft, answers_match, validate_id};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors recovered at the pipeline boundary.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error("no quiz exists with id={0}")]
    NotFound(i64),

    /// One message per violated field, reported individually by the shell.
    #[error("the quiz is invalid")]
    Validation(Vec<String>),

    #[error("storage error: {0}")]
    Store(String),
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(messages) => CommandError::Validation(messages),
            StoreError::Connection(message) => CommandError::Store(message),
        }
    }
}

/// The list/show/add/delete/edit/test pipelines.
pub struct QuizCommands<S: QuizStore, I: InteractionPort> {
    store: Arc<S>,
    interaction: Arc<I>,
}

impl<S: QuizStore, I: InteractionPort> QuizCommands<S, I> {
    pub fn new(store: Arc<S>, interaction: Arc<I>) -> Self {
        Self { store, interaction }
    }

    /// Fetch every quiz for display.
    pub async fn list(&self) -> Result<Vec<Quiz>, CommandError> {
        Ok(self.store.list().await?)
    }

    /// Validate the id token and fetch the matching quiz.
    pub async fn show(&self, arg: Option<&str>) -> Result<Quiz, CommandError> {
        let id = validate_id(arg)?;
        self.fetch(id).await
    }

    /// Ask for question and answer, then persist a new quiz.
    pub async fn add(&self) -> Result<Quiz, CommandError> {
        let question = self.interaction.ask("Enter a question: ").await;
        let answer = self.interaction.ask("Enter an answer: ").await;
        let quiz = self
            .store
            .create(&QuizDraft::new(question, answer))
            .await?;
        info!(id = quiz.id, "quiz created");
        Ok(quiz)
    }

    /// Delete by id. A nonexistent id is accepted silently.
    pub async fn delete(&self, arg: Option<&str>) -> Result<(), CommandError> {
        let id = validate_id(arg)?;
        let affected = self.store.delete_by_id(id).await?;
        if affected == 0 {
            debug!(id, "delete affected no rows");
        } else {
            info!(id, "quiz deleted");
        }
        Ok(())
    }

    /// Re-ask both fields seeded with the current values, then persist.
    pub async fn edit(&self, arg: Option<&str>) -> Result<Quiz, CommandError> {
        let id = validate_id(arg)?;
        let current = self.fetch(id).await?;
        let question = self
            .interaction
            .ask_with_prefill("Enter a question: ", &current.question)
            .await;
        let answer = self
            .interaction
            .ask_with_prefill("Enter an answer: ", &current.answer)
            .await;
        let updated = self.store.update(&Quiz::new(id, question, answer)).await?;
        info!(id, "quiz updated");
        Ok(updated)
    }

    /// Ask one quiz and score the answer. No retry on a miss.
    ///
    /// A missing id fails before any prompt is shown.
    pub async fn test(&self, arg: Option<&str>) -> Result<Verdict, CommandError> {
        let id = validate_id(arg)?;
        let quiz = self.fetch(id).await?;
        self.interaction.line(&quiz.question);
        let given = self.interaction.ask("Enter the answer: ").await;
        if answers_match(&given, &quiz.answer) {
            Ok(Verdict::Correct)
        } else {
            Ok(Verdict::Incorrect)
        }
    }

    async fn fetch(&self, id: i64) -> Result<Quiz, CommandError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CommandError::NotFound(id))
    }
}
