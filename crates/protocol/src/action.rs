//! Logical input actions.
//!
//! Raw key presses are translated into these actions by the terminal layer;
//! the board only ever reacts to an [`Action`], never to a concrete key.

use serde::{Deserialize, Serialize};

/// A user intent recognised by the board.
///
/// # Examples
///
/// ```
/// use kancli_protocol::Action;
///
/// assert!(Action::Quit.is_terminating());
/// assert!(!Action::Right.is_terminating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open a form to create a task in the focused column.
    New,
    /// Open a form to edit the selected task.
    Edit,
    /// Delete the selected task.
    Delete,
    /// Select the previous task in the focused column.
    Up,
    /// Select the next task in the focused column.
    Down,
    /// Focus the previous column.
    Left,
    /// Focus the next column.
    Right,
    /// Advance the selected task, or confirm the current form field.
    Confirm,
    /// Toggle between the short and full help.
    Help,
    /// Quit the application.
    Quit,
    /// Leave the current form without saving.
    Back,
}

impl Action {
    /// Returns `true` if this action should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
