//! Configuration loading and management
//!
//! Handles parsing of the optional `todo.toml` file in the working
//! directory. A missing file means defaults; a present but invalid file
//! is an error so a typo never silently changes where tasks are stored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the configuration file
pub const CONFIG_FILE: &str = "todo.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the tasks JSON file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Terminal output configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            ui: UiConfig::default(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colored prompt and error output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from a `todo.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `todo.toml` from `dir`, or defaults when the file is absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "data_file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_from_dir_defaults_when_missing() {
        let dir = tempdir().expect("tempdir");
        let cfg = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(cfg.data_file, PathBuf::from("tasks.json"));
        assert!(cfg.ui.color);
    }

    #[test]
    fn load_from_dir_reads_file() {
        let dir = tempdir().expect("tempdir");
        let content = r#"
data_file = "my-tasks.json"

[ui]
color = false
"#;
        fs::write(dir.path().join(CONFIG_FILE), content.trim()).expect("write config");

        let cfg = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(cfg.data_file, PathBuf::from("my-tasks.json"));
        assert!(!cfg.ui.color);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "data_file = \"t.json\"").expect("write config");

        let cfg = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(cfg.data_file, PathBuf::from("t.json"));
        assert!(cfg.ui.color);
    }

    #[test]
    fn invalid_toml_is_an_error_not_a_fallback() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "data_file = [broken").expect("write config");

        let err = Config::load_from_dir(dir.path()).expect_err("invalid config");
        match err {
            Error::TomlParse(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_data_file_rejected() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "data_file = \"\"").expect("write config");

        let err = Config::load_from_dir(dir.path()).expect_err("invalid config");
        match err {
            Error::InvalidConfig(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
