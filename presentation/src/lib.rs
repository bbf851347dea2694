//! Presentation layer for quiz-trainer
//!
//! The interactive shell (REPL), the console adapter for the interaction
//! port, output formatting, and the CLI argument definitions.

pub mod cli;
pub mod output;
pub mod shell;

// Re-export commonly used types
pub use cli::Cli;
pub use output::ConsoleFormatter;
pub use shell::{ConsoleInteraction, QuizRepl};
