//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quiz-trainer
#[derive(Parser, Debug)]
#[command(name = "quiz-trainer")]
#[command(author, version, about = "Interactive command line quiz trainer")]
#[command(long_about = r#"
Quiz Trainer opens an interactive shell for practicing trivia questions
stored in a local SQLite database.

Shell commands: help, list, show <id>, add, delete <id>, edit <id>,
test <id>, play, credits, quit.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/quiz-trainer/config.toml   Global config

Example:
  quiz-trainer
  quiz-trainer --database ./quizzes.sqlite -v
"#)]
pub struct Cli {
    /// Path to the SQLite database file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
