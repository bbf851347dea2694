//! REPL (Read-Eval-Print Loop) for the quiz shell
//!
//! Owns the read-eval loop: one command line per iteration, dispatched to
//! the matching pipeline. Every pipeline, successful or not, ends with
//! the single error-reporting step followed by the next prompt, so the
//! shell never stalls after a failed command.

use crate::output::ConsoleFormatter;
use crate::shell::interaction::ConsoleInteraction;
use colored::Colorize;
use quiz_application::{
    CommandError, InteractionPort, PlayUseCase, QuizCommands, QuizStore, Verdict,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::error::ReadlineError;
use std::sync::Arc;

/// Result of handling a command
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive quiz shell
pub struct QuizRepl<S: QuizStore + 'static> {
    commands: QuizCommands<S, ConsoleInteraction>,
    play: PlayUseCase<S, ConsoleInteraction>,
    interaction: Arc<ConsoleInteraction>,
}

impl<S: QuizStore + 'static> QuizRepl<S> {
    pub fn new(store: Arc<S>, interaction: Arc<ConsoleInteraction>) -> Self {
        Self {
            commands: QuizCommands::new(Arc::clone(&store), Arc::clone(&interaction)),
            play: PlayUseCase::new(store, Arc::clone(&interaction)),
            interaction,
        }
    }

    /// Run the interactive loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns a rustyline error only for genuine terminal failures;
    /// command errors are reported and recovered inside the loop.
    pub async fn run(&self) -> rustyline::Result<()> {
        let history_path = dirs::data_dir().map(|p| p.join("quiz-trainer").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            self.interaction.load_history(path);
        }

        self.print_welcome();

        loop {
            match self.interaction.read_command("quiz> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    self.interaction.add_history(line);

                    match self.dispatch(line).await {
                        CommandResult::Exit => break,
                        CommandResult::Continue => continue,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            self.interaction.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────╮".cyan());
        println!("{}", "│            Quiz Trainer             │".cyan());
        println!("{}", "╰─────────────────────────────────────╯".cyan());
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  {} - Show this help.", "h | help".cyan());
        println!("  {}     - List the existing quizzes.", "list".cyan());
        println!(
            "  {} - Show the question and the answer of the given quiz.",
            "show <id>".cyan()
        );
        println!("  {}      - Add a new quiz interactively.", "add".cyan());
        println!("  {} - Delete the given quiz.", "delete <id>".cyan());
        println!("  {} - Edit the given quiz.", "edit <id>".cyan());
        println!("  {} - Try to answer the given quiz.", "test <id>".cyan());
        println!(
            "  {} - Answer all quizzes in random order; one mistake ends the game.",
            "p | play".cyan()
        );
        println!("  {}  - Show the credits.", "credits".cyan());
        println!("  {} - Exit the program.", "q | quit".cyan());
        println!();
    }

    /// One command token plus an optional single argument token.
    async fn dispatch(&self, line: &str) -> CommandResult {
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

        match command {
            "h" | "help" => self.print_help(),
            "list" => self.run_list().await,
            "show" => self.run_show(arg).await,
            "add" => self.run_add().await,
            "delete" => self.run_delete(arg).await,
            "edit" => self.run_edit(arg).await,
            "test" => self.run_test(arg).await,
            "p" | "play" => self.run_play().await,
            "credits" => {
                println!("Quiz Trainer, a command line trivia practice tool.");
                println!("{}", "quiz-trainer contributors".green());
            }
            "q" | "quit" => {
                println!("Bye!");
                return CommandResult::Exit;
            }
            _ => {
                self.interaction
                    .error(&format!("unknown command: {command}"));
                println!("Type {} for available commands", "help".cyan());
            }
        }

        CommandResult::Continue
    }

    async fn run_list(&self) {
        match self.commands.list().await {
            Ok(quizzes) => {
                for quiz in &quizzes {
                    println!("{}", ConsoleFormatter::question_line(quiz));
                }
            }
            Err(e) => self.report_error(&e),
        }
    }

    async fn run_show(&self, arg: Option<&str>) {
        match self.commands.show(arg).await {
            Ok(quiz) => println!("{}", ConsoleFormatter::record_line(&quiz)),
            Err(e) => self.report_error(&e),
        }
    }

    async fn run_add(&self) {
        match self.commands.add().await {
            Ok(quiz) => println!("{}", ConsoleFormatter::added(&quiz)),
            Err(e) => self.report_error(&e),
        }
    }

    async fn run_delete(&self, arg: Option<&str>) {
        if let Err(e) = self.commands.delete(arg).await {
            self.report_error(&e);
        }
    }

    async fn run_edit(&self, arg: Option<&str>) {
        match self.commands.edit(arg).await {
            Ok(quiz) => println!("{}", ConsoleFormatter::changed(&quiz)),
            Err(e) => self.report_error(&e),
        }
    }

    async fn run_test(&self, arg: Option<&str>) {
        match self.commands.test(arg).await {
            Ok(Verdict::Correct) => println!("{}", "Correct".green()),
            Ok(Verdict::Incorrect) => println!("{}", "Incorrect".red()),
            Err(e) => self.report_error(&e),
        }
    }

    async fn run_play(&self) {
        let mut rng = StdRng::from_os_rng();
        if let Err(e) = self.play.execute(&mut rng).await {
            self.report_error(&e);
        }
    }

    /// The single terminal error-reporting step of every pipeline.
    ///
    /// Validation failures are unpacked into one error line per field
    /// message; every other error reports its message text alone.
    fn report_error(&self, err: &CommandError) {
        match err {
            CommandError::Validation(messages) => {
                self.interaction.error("the quiz is invalid:");
                for message in messages {
                    self.interaction.error(message);
                }
            }
            other => self.interaction.error(&other.to_string()),
        }
    }
}
