use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory for driving the binary.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_tasks(&self, contents: &str) {
        fs::write(self.tasks_file(), contents).expect("write tasks file");
    }

    pub fn read_tasks(&self) -> String {
        fs::read_to_string(self.tasks_file()).expect("read tasks file")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join("todo.toml"), contents).expect("write config");
    }

    /// Command for the binary, rooted in this directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("task-cli").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run a scripted interactive session, asserting it exits cleanly.
    pub fn session(&self, script: &str) -> assert_cmd::assert::Assert {
        self.cli().write_stdin(script).assert().success()
    }
}
