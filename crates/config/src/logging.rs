//! Log output configuration.
//!
//! The board runs in the terminal's alternate screen with raw mode enabled,
//! so log output always goes to a file. This module describes where that
//! file lives and how verbose it is.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Verbosity of the log file.
///
/// # Examples
///
/// ```
/// use kancli_config::LogLevel;
///
/// assert_eq!(LogLevel::default(), LogLevel::Debug);
/// assert_eq!(LogLevel::Warn.as_directive(), "warn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-event tracing.
    Trace,
    /// Board transitions and form lifecycle.
    #[default]
    Debug,
    /// Startup and shutdown only.
    Info,
    /// Unexpected but recoverable conditions.
    Warn,
    /// Errors only.
    Error,
    /// No logging at all.
    Off,
}

impl LogLevel {
    /// Returns the filter directive understood by the log subscriber.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

/// Configuration for the log file.
///
/// # Examples
///
/// ```
/// use kancli_config::{LogConfig, LogLevel};
///
/// let config = LogConfig::default();
/// assert_eq!(config.file.to_str(), Some("debug.log"));
/// assert_eq!(config.level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the log file. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Minimum level written to the file.
    #[serde(default)]
    pub level: LogLevel,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            level: LogLevel::default(),
        }
    }
}

impl LogConfig {
    /// Returns the directory holding the log file.
    ///
    /// A bare file name resolves to the current directory (`"."`).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use kancli_config::LogConfig;
    ///
    /// let config = LogConfig::default();
    /// assert_eq!(config.directory(), Path::new("."));
    /// ```
    #[must_use]
    pub fn directory(&self) -> &std::path::Path {
        match self.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => std::path::Path::new("."),
        }
    }

    /// Validates the log configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file path has no file name component.
    pub fn validate(&self) -> crate::Result<()> {
        if self.file.file_name().is_none() {
            return Err(crate::ConfigError::InvalidLogFile {
                path: self.file.clone(),
            });
        }
        Ok(())
    }
}
