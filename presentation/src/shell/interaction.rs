//! Console adapter for the interaction port
//!
//! One rustyline editor, shared between the REPL's command prompt and the
//! in-pipeline question prompts, behind a mutex. Exactly one pipeline is
//! active at a time, so the lock is never contended; it only satisfies the
//! `Send + Sync` bound of the port.

use async_trait::async_trait;
use colored::Colorize;
use quiz_application::InteractionPort;
use rustyline::DefaultEditor;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

/// Interaction adapter over a shared line editor.
pub struct ConsoleInteraction {
    editor: Mutex<DefaultEditor>,
}

impl ConsoleInteraction {
    /// Create the adapter with a fresh editor.
    ///
    /// # Errors
    ///
    /// Returns a rustyline error if the terminal cannot be set up.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: Mutex::new(DefaultEditor::new()?),
        })
    }

    /// Read one command line for the shell loop.
    ///
    /// Unlike the port's `ask`, readline errors (EOF, interrupt) are
    /// propagated so the loop can decide between quitting and re-prompting.
    pub fn read_command(&self, prompt: &str) -> rustyline::Result<String> {
        self.editor.lock().expect("editor lock").readline(prompt)
    }

    pub fn load_history(&self, path: &Path) {
        let _ = self.editor.lock().expect("editor lock").load_history(path);
    }

    pub fn save_history(&self, path: &Path) {
        let _ = self.editor.lock().expect("editor lock").save_history(path);
    }

    pub fn add_history(&self, line: &str) {
        let _ = self
            .editor
            .lock()
            .expect("editor lock")
            .add_history_entry(line);
    }

    fn read_line(&self, prompt: &str, prefill: Option<&str>) -> String {
        let mut editor = self.editor.lock().expect("editor lock");
        let result = match prefill {
            Some(initial) => editor.readline_with_initial(prompt, (initial, "")),
            None => editor.readline(prompt),
        };
        // An abandoned prompt resolves to the empty string; downstream
        // validation handles emptiness.
        result.map(|line| line.trim().to_string()).unwrap_or_default()
    }
}

#[async_trait]
impl InteractionPort for ConsoleInteraction {
    async fn ask(&self, prompt: &str) -> String {
        self.read_line(prompt, None)
    }

    async fn ask_with_prefill(&self, prompt: &str, prefill: &str) -> String {
        // Prefill needs a line-editing terminal; degrade silently otherwise.
        if std::io::stdout().is_terminal() {
            self.read_line(prompt, Some(prefill))
        } else {
            self.read_line(prompt, None)
        }
    }

    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn error(&self, text: &str) {
        eprintln!("{} {}", "Error:".red().bold(), text);
    }

    fn banner(&self, text: &str) {
        println!("{}", crate::output::ConsoleFormatter::banner(text));
    }
}
