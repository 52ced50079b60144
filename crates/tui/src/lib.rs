//! Terminal UI for the kancli application.
//!
//! This crate holds the board state machine and its Ratatui rendering.
//!
//! # Overview
//!
//! - [`board`]: The board: three columns, focus, and the active form
//! - [`column`]: A single column and the actions it handles
//! - [`form`]: The two-stage task form
//! - [`list`]: The selectable task list inside a column
//! - [`input`]: Single-line text input used by the form
//! - [`app`]: Main application struct and run loop
//! - [`event`]: Event polling and key mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`layout`]: Shared layout measurements
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use kancli_protocol::seed::seed_tasks;
//! use kancli_tui::{App, Board, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Board::with_tasks(seed_tasks()));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod board;
pub mod column;
pub mod event;
pub mod form;
pub mod input;
pub mod layout;
pub mod list;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use board::{Board, InputOwner};
pub use column::{Column, ColumnOutcome};
pub use form::{Form, FormOutcome, Stage};
