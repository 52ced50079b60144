//! Messages processed by the board.
//!
//! Input arrives as a [`Message`]; processing one message may produce at
//! most one follow-up message (a [`MoveEvent`] or a form [`Submission`]),
//! which the caller feeds back before reading more input. This keeps every
//! cross-column write a separate, observable step.

use crate::action::Action;
use crate::task::Task;

/// Where a task is written inside a column.
///
/// # Examples
///
/// ```
/// use kancli_protocol::Slot;
///
/// assert!(Slot::Append.is_append());
/// assert_eq!(Slot::At(2).index(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// Replace the task at this position.
    At(usize),
    /// Insert after all existing tasks.
    #[default]
    Append,
}

impl Slot {
    /// Returns `true` for [`Slot::Append`].
    #[must_use]
    pub const fn is_append(self) -> bool {
        matches!(self, Self::Append)
    }

    /// Returns the replaced position, or `None` when appending.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::At(index) => Some(index),
            Self::Append => None,
        }
    }
}

/// A task leaving its column for the next one.
///
/// The carried task has already been advanced to its new status, so the
/// destination column is `task.status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    /// The task, with its status already set to the destination.
    pub task: Task,
}

/// A completed form: the task to write and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The produced task; its status names the destination column.
    pub task: Task,
    /// Append for new tasks, the original position for edits.
    pub slot: Slot,
}

/// A single keystroke destined for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    /// Insert a character at the cursor.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
}

/// Everything the board reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The terminal has a new size.
    Resize {
        /// Width in cells.
        width: u16,
        /// Height in cells.
        height: u16,
    },
    /// A logical key action.
    Action(Action),
    /// Text editing input for the active form.
    Edit(EditKey),
    /// A form finished and its task must be written to a column.
    FormSubmitted(Submission),
    /// A task left its column and must be appended to the next one.
    TaskMoved(MoveEvent),
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<EditKey> for Message {
    fn from(key: EditKey) -> Self {
        Self::Edit(key)
    }
}
