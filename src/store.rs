//! The task collection and its JSON persistence.
//!
//! `TodoList` owns the in-memory tasks and the contract with the tasks
//! file: the whole file is read once at load and overwritten in full on
//! save. Ids are allocated as `max(existing ids) + 1`, recomputed from
//! the live collection rather than stored, so deleting every task resets
//! the counter back to 1 while partial deletions never reuse a gap.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::{Status, Task, TaskChange};

/// Outcome of a listing, keeping "nothing stored" distinct from
/// "nothing matched the filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The collection itself is empty.
    Empty,
    /// The collection is non-empty but no task has this status.
    NoMatch(Status),
    /// Matching tasks, in insertion order.
    Tasks(Vec<Task>),
}

/// In-memory task collection bound to a JSON file.
#[derive(Debug)]
pub struct TodoList {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TodoList {
    /// Load the task collection from `path`.
    ///
    /// A missing file is created containing an empty array. A present but
    /// unreadable or malformed file is a [`Error::CorruptStore`], never
    /// silently an empty list.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            let list = Self {
                path,
                tasks: Vec::new(),
            };
            list.save()?;
            return Ok(list);
        }

        let content = fs::read_to_string(&path)?;
        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| Error::CorruptStore {
                path: path.clone(),
                source,
            })?;

        debug!(count = tasks.len(), path = %path.display(), "loaded tasks");
        Ok(Self { path, tasks })
    }

    /// Overwrite the tasks file with the full current collection.
    ///
    /// Writes go to a temp file in the same directory first, then rename
    /// into place, so a crash mid-write leaves the previous file intact.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        write_atomic(&self.path, content.as_bytes())?;
        debug!(count = self.tasks.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }

    /// Append a new `todo` task, returning its assigned id.
    pub fn add_task(&mut self, description: &str) -> Result<u32> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        let id = self.next_id();
        self.tasks.push(Task::new(id, description.to_string()));
        debug!(id, "task added");
        Ok(id)
    }

    /// Apply one change to the task with `id`, refreshing `updated_at`.
    ///
    /// An unknown id is reported as [`Error::NotFound`] and nothing is
    /// mutated. A blank replacement description is rejected like at
    /// creation.
    pub fn update_task(&mut self, id: u32, change: TaskChange) -> Result<()> {
        if let TaskChange::Description(description) = &change {
            if description.trim().is_empty() {
                return Err(Error::EmptyDescription);
            }
        }

        let index = self.position_of(id).ok_or(Error::NotFound(id))?;
        let task = &mut self.tasks[index];
        match change {
            TaskChange::Description(description) => task.description = description,
            TaskChange::Status(status) => task.status = status,
        }
        task.updated_at = Utc::now();
        debug!(id, "task updated");
        Ok(())
    }

    /// Remove the task with `id`, returning the removed task.
    ///
    /// Remaining ids are not renumbered.
    pub fn delete_task(&mut self, id: u32) -> Result<Task> {
        let index = self.position_of(id).ok_or(Error::NotFound(id))?;
        let task = self.tasks.remove(index);
        debug!(id, "task deleted");
        Ok(task)
    }

    /// Tasks in insertion order, optionally filtered by status.
    pub fn list_tasks(&self, filter: Option<Status>) -> Listing {
        if self.tasks.is_empty() {
            return Listing::Empty;
        }

        match filter {
            None => Listing::Tasks(self.tasks.clone()),
            Some(status) => {
                let matching: Vec<Task> = self
                    .tasks
                    .iter()
                    .filter(|task| task.status == status)
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    Listing::NoMatch(status)
                } else {
                    Listing::Tasks(matching)
                }
            }
        }
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Path of the tasks file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next id to assign: `max(existing ids) + 1`, or 1 when empty.
    fn next_id(&self) -> u32 {
        self.tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Index of the task with `id` in the collection, if present.
    fn position_of(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

/// Atomically write data to a file
///
/// This writes to a temporary file in the same directory, then renames
/// it to the target path. This ensures the file is either fully written
/// or not modified at all.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    // Ensure parent directory exists; a bare filename has an empty parent
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension(format!(
        "{}.tmp.{}",
        path.extension().and_then(|e| e.to_str()).unwrap_or(""),
        std::process::id()
    ));

    let mut temp_file = File::create(&temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    // Atomic rename
    fs::rename(&temp_path, path)?;

    Ok(())
}
