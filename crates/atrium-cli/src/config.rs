//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding config and history.
pub const CONFIG_DIR: &str = ".atrium";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// chrono format used to read and print dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Filter directive used when `ATRIUM_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Directory holding the config file and the REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(CONFIG_DIR))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the default config, writing defaults there when no file exists yet.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&Self::path()?)
    }

    /// Load `path`, or write and return defaults when it is absent.
    ///
    /// An unreadable or malformed file is an error and is left untouched.
    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            date_format: default_date_format(),
            history_size: default_history_size(),
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_history_size() -> usize {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.date_format, "%d-%m-%Y");
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.settings.log_level, "warn");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.settings.date_format = "%Y-%m-%d".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nlog_level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.log_level, "debug");
        assert!(config.settings.color);
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings\ncolor = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_DIR).join("config.toml");

        let config = Config::load_or_init_at(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_is_never_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let contents = "[settings]\ncolor = false\ndate_format = \"%Y-%m-%d\"\nhistory_size = oops\n";
        fs::write(&path, contents).unwrap();

        assert!(matches!(Config::load_or_init_at(&path), Err(CliError::Toml(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_existing_file_is_loaded_as_is() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        let config = Config::load_or_init_at(&path).unwrap();
        assert!(!config.settings.color);
        assert!(fs::read_to_string(&path).unwrap().starts_with("[settings]\ncolor = false"));
    }
}
