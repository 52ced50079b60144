//! Locating, reading, and writing configuration files.
//!
//! Files may be JSON5 (comments, unquoted keys, trailing commas) or plain
//! JSON; both go through the JSON5 parser. Files are always written back as
//! pretty-printed JSON, which is valid JSON5.
//!
//! # File Locations
//!
//! Candidates are tried in this order, the first existing file wins:
//!
//! 1. `./kancli.json5`, `./kancli.json`
//! 2. `<config dir>/kancli/config.json5`, `<config dir>/kancli/config.json`
//!    where `<config dir>` is `~/.config` on Linux.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["kancli.json5", "kancli.json"];

/// Directory name under the platform config directory.
const USER_CONFIG_DIR: &str = "kancli";

/// File names looked up in the user config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every candidate configuration path, highest priority first.
///
/// `user_config_root` is the platform config directory (e.g. `~/.config`);
/// pass `None` when it cannot be determined.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use kancli_config::persistence::candidate_paths;
///
/// let paths = candidate_paths(Path::new("/work"), Some(Path::new("/home/me/.config")));
/// assert_eq!(paths[0], Path::new("/work/kancli.json5"));
/// assert_eq!(paths[3], Path::new("/home/me/.config/kancli/config.json"));
/// ```
#[must_use]
pub fn candidate_paths(working_dir: &Path, user_config_root: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| working_dir.join(name));
    let user = user_config_root
        .into_iter()
        .flat_map(|root| {
            USER_FILE_NAMES
                .iter()
                .map(move |name| root.join(USER_CONFIG_DIR).join(name))
        });
    local.chain(user).collect()
}

/// Finds the configuration file to load, if any.
///
/// Searches relative to the current directory, then the user config
/// directory. Returns `None` when no candidate exists.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_root = dirs::config_dir();
    candidate_paths(Path::new("."), user_root.as_deref())
        .into_iter()
        .find(|path| path.is_file())
}

/// Reads and parses a JSON5 or JSON configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file (or one of its
/// parent directories) cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}
