//! Domain layer for quiz-trainer
//!
//! This crate contains the core entities and pure validation logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! The only domain entity: a trivia question with its expected answer,
//! keyed by an integer id assigned by the storage layer.
//!
//! ## Answer matching
//!
//! Answers are compared case-insensitively after trimming, both in `test`
//! mode and during a play session.

pub mod quiz;
pub mod validate;

// Re-export commonly used types
pub use quiz::{Quiz, QuizDraft, answers_match};
pub use validate::{IdError, validate_id};
