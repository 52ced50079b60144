//! File logging for the binary.
//!
//! The terminal is in raw mode while the board runs, so every log line goes
//! to a file through a non-blocking writer. The returned guard flushes that
//! writer when dropped and must live until the program exits.

use anyhow::Context;
use kancli_config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides the
/// configured level, e.g. `KANCLI_LOG=kancli_tui=trace`.
pub const LOG_ENV: &str = "KANCLI_LOG";

/// Installs the global subscriber writing to the configured log file.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, the
/// filter directive is invalid, or a subscriber is already installed.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let directory = config.directory();
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let file_name = config
        .file
        .file_name()
        .with_context(|| format!("log file {} has no file name", config.file.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("failed to open log file {}", config.file.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let override_directive = std::env::var(LOG_ENV).ok();
    let filter = build_filter(config, override_directive.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install log subscriber")?;

    Ok(guard)
}

/// Builds the log filter: the override directive when present, otherwise
/// the configured level.
fn build_filter(config: &LogConfig, override_directive: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directive = override_directive
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or(config.level.as_directive());
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter {directive:?}"))
}
