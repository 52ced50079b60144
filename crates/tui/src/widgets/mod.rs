//! Widget components for the kancli TUI.
//!
//! Each widget is a plain function that renders borrowed state into a
//! [`Buffer`](ratatui::buffer::Buffer), so the board can be drawn and
//! asserted on without a terminal.
//!
//! # Modules
//!
//! - [`board`]: The whole screen: columns and help, the form, or the
//!   loading placeholder
//! - [`column`]: A single column with its task list
//! - [`form`]: The task creation and edit form
//! - [`help`]: Short and full key binding help
//!
//! # Example
//!
//! ```
//! use kancli_protocol::Message;
//! use kancli_tui::{Board, widgets};
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let mut board = Board::new();
//! board.update(Message::Resize { width: 80, height: 24 });
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//! widgets::render_board(&board, area, &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod form;
pub mod help;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use column::render_column;
pub use form::render_form;
pub use help::{help_height, render_help};
