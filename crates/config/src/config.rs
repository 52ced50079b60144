//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the kancli application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the kancli application.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration.
///
/// # Examples
///
/// ```
/// use kancli_config::Config;
///
/// let config = Config::default();
/// assert!(config.seed_tasks);
/// assert!(config.full_help);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log file location and verbosity.
    #[serde(default)]
    pub log: LogConfig,

    /// Whether a fresh board starts with one demo task per column.
    #[serde(default = "default_true")]
    pub seed_tasks: bool,

    /// Whether the help panel starts expanded.
    #[serde(default = "default_true")]
    pub full_help: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            seed_tasks: true,
            full_help: true,
        }
    }
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// See [`crate::persistence`] for the search order. If no configuration
    /// file is found, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kancli_config::Config;
    ///
    /// # fn example() -> kancli_config::Result<()> {
    /// let config = Config::load_from("kancli.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        self.log.validate()
    }
}
