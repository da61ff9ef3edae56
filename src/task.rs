//! Task model for task-cli.
//!
//! A task is one to-do item: numeric id, description, status, and
//! creation/update timestamps. Tasks are created through
//! [`crate::store::TodoList::add_task`] or by deserializing the tasks
//! file, and are serialized back exactly as stored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle status of a task.
///
/// Serialized as the exact strings `todo`, `in-progress`, `done`; the
/// same strings are accepted (case-sensitively) as list filters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses, in workflow order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// One to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with status `todo` and both timestamps set to now.
    pub fn new(id: u32, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A single mutation applied to an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    /// Replace the description.
    Description(String),
    /// Set the status.
    Status(Status),
}
