//! Application layer for quiz-trainer
//!
//! This crate contains the command pipelines, the play session engine,
//! and the port definitions. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    interaction::InteractionPort,
    store::{InMemoryQuizStore, QuizStore, StoreError, validate_draft},
};
pub use use_cases::commands::{CommandError, QuizCommands};
pub use use_cases::play::{PlayUseCase, QuizPool, Verdict};
