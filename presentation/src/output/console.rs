//! Console formatter for quiz records and the score banner

use colored::Colorize;
use quiz_domain::Quiz;

/// Formats quiz records and banners for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `[id]: question` - the listing line
    pub fn question_line(quiz: &Quiz) -> String {
        format!("[{}]: {}", quiz.id.to_string().magenta(), quiz.question)
    }

    /// `[id]: question => answer` - the full record line
    pub fn record_line(quiz: &Quiz) -> String {
        format!(
            "[{}]: {} {} {}",
            quiz.id.to_string().magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        )
    }

    /// Confirmation after `add`
    pub fn added(quiz: &Quiz) -> String {
        format!("{} {}", "Added".magenta(), Self::record_line(quiz))
    }

    /// Confirmation after `edit`
    pub fn changed(quiz: &Quiz) -> String {
        format!(
            "Changed quiz [{}] to: {} {} {}",
            quiz.id.to_string().magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        )
    }

    /// Large text for the final score of a play session.
    pub fn banner(text: &str) -> String {
        let inner = format!("  {text}  ");
        let width = inner.chars().count();
        let top = format!("╭{}╮", "─".repeat(width));
        let bottom = format!("╰{}╯", "─".repeat(width));
        format!(
            "{}\n{}\n{}",
            top.green(),
            format!("│{}│", inner.bold()).green(),
            bottom.green()
        )
    }
}
