//! kancli - a three-column kanban board for the terminal.
//!
//! This is the main binary: it loads the configuration, starts file logging,
//! and runs the board until the user quits.

mod logging;

use anyhow::Context;
use kancli_config::Config;
use kancli_protocol::seed::seed_tasks;
use kancli_tui::{App, Board, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Flushes buffered log lines when dropped at the end of main.
    let _log_guard = logging::init(&config.log)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %config.log.file.display(),
        "starting kancli"
    );

    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let board = if config.seed_tasks {
        Board::with_tasks(seed_tasks())
    } else {
        Board::new()
    };
    let mut app = App::new(board.with_full_help(config.full_help));

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    info!("kancli exited");
    result
}
