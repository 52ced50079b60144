//! Terminal setup and teardown.
//!
//! The board runs in raw mode on the alternate screen. [`restore`] undoes
//! that and is safe to call more than once, so the panic hook and the normal
//! exit path share it.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to enter raw mode or the alternate screen.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to return the terminal to its normal state.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen, and wraps stdout in a ratatui
/// terminal.
///
/// If a later step fails, the steps already taken are undone before the
/// error is returned.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use kancli_tui::terminal;
///
/// # fn example() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// // draw...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = restore();
        return Err(TerminalError::Setup(err));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|err| {
        let _ = restore();
        TerminalError::Setup(err)
    })
}

/// Restores the terminal a [`setup_terminal`] call prepared.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    restore()?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Works without a [`Terminal`] handle, which makes it usable from a panic
/// hook.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore() -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(io::stdout(), LeaveAlternateScreen, Show).map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal, then runs the
/// previously installed hook so the panic message lands on a usable screen.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
