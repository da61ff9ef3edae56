//! Shared output formatting for the command loop.
//!
//! A stateless presentation layer: pure functions from message + style
//! to printable text. Magenta for the prompt, red for errors, nothing
//! that needs terminal state.

use crossterm::style::Stylize;

use crate::task::Task;

/// Styling options for prompt and error output.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    pub color: bool,
}

impl Styles {
    /// The input prompt, styled when color is on.
    pub fn prompt(&self) -> String {
        if self.color {
            "task-cli > ".dark_magenta().to_string()
        } else {
            "task-cli > ".to_string()
        }
    }

    /// An `Error:`-prefixed message line, styled when color is on.
    pub fn error(&self, message: &str) -> String {
        let line = format!("Error: {message}");
        if self.color {
            line.dark_red().to_string()
        } else {
            line
        }
    }
}

/// One-line human representation of a task.
pub fn format_task(task: &Task) -> String {
    format!(
        "#{} [{}] {} (created {}, updated {})",
        task.id,
        task.status,
        task.description,
        task.created_at.format("%Y-%m-%d %H:%M"),
        task.updated_at.format("%Y-%m-%d %H:%M"),
    )
}
