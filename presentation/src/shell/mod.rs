//! Interactive shell: the console interaction adapter and the REPL driver

mod interaction;
mod repl;

pub use interaction::ConsoleInteraction;
pub use repl::QuizRepl;
