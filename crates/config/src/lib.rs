//! Configuration management for the kancli application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`logging`]: Log file location and verbosity
//! - [`persistence`]: Config file lookup, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./kancli.json5` or `./kancli.json`)
//! 2. User config (`~/.config/kancli/config.json5` or `~/.config/kancli/config.json`)
//! 3. Built-in defaults
//!
//! The `KANCLI_LOG` environment variable, when set, overrides the configured
//! log level with a filter directive (applied by the binary).
//!
//! # Example File
//!
//! ```json5
//! {
//!   log: { file: "debug.log", level: "debug" },
//!   // start with an empty board
//!   seed_tasks: false,
//!   full_help: true,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kancli_config::Config;
//!
//! # fn example() -> kancli_config::Result<()> {
//! let config = Config::load()?;
//! println!("Logging to {}", config.log.file.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogLevel};
