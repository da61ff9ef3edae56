//! Error types for task-cli
//!
//! Error classes per the command loop's handling:
//! - User input errors: reported to the user, the loop continues.
//! - Not found: reported, no mutation occurs, the loop continues.
//! - Corrupt store: fatal at startup only.
//! - Environment errors: IO/serialization failures, propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for task-cli operations
#[derive(Error, Debug)]
pub enum Error {
    // User input errors (the loop reports and keeps going)
    #[error("Please enter a command")]
    EmptyInput,

    #[error("'{0}' is not a valid command. Please enter a valid command (add, update, delete, mark-todo, mark-in-progress, mark-done, list, exit)")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid task ID '{0}': expected a number")]
    InvalidId(String),

    #[error("Invalid status '{0}' (expected todo|in-progress|done)")]
    InvalidStatus(String),

    #[error("Unclosed quote in input")]
    UnclosedQuote,

    #[error("Task cannot be empty. Try again.")]
    EmptyDescription,

    // Not found (reported, no mutation)
    #[error("Task with ID {0} could not be found. Please try again with another ID.")]
    NotFound(u32),

    // Fatal at startup
    #[error("Tasks file {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Environment failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for task-cli operations
pub type Result<T> = std::result::Result<T, Error>;
