//! The task record moved around the board.
//!
//! Tasks carry no identity of their own: a task is addressed by its
//! position inside the column that holds it, and editing or moving a task
//! replaces or relocates the whole record.

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// A single work item on the board.
///
/// The `status` of a task always matches the column that contains it; the
/// board keeps the two in sync whenever a task is inserted or moved.
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Status, Task};
///
/// let task = Task::new(Status::ToDo, "buy milk", "strawberry milk");
/// assert_eq!(task.status, Status::ToDo);
/// assert_eq!(task.title, "buy milk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Which workflow stage, and therefore which column, the task is in.
    pub status: Status,
    /// Short summary shown as the list item title.
    pub title: String,
    /// Longer text shown beneath the title.
    pub description: String,
}

impl Task {
    /// Creates a task with the given status, title, and description.
    #[must_use]
    pub fn new(status: Status, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Advances the task to the next status in the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::{Status, Task};
    ///
    /// let mut task = Task::new(Status::Done, "stay cool", "as a cucumber");
    /// task.advance();
    /// assert_eq!(task.status, Status::ToDo);
    /// ```
    pub fn advance(&mut self) {
        self.status = self.status.next();
    }

    /// Consumes the task and returns it advanced to the next status.
    #[must_use]
    pub fn advanced(mut self) -> Self {
        self.advance();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_fields() {
        let task = Task::new(Status::InProgress, "write code", "don't worry, it's Rust");

        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.title, "write code");
        assert_eq!(task.description, "don't worry, it's Rust");
    }

    #[test]
    fn advance_steps_through_cycle() {
        let mut task = Task::new(Status::ToDo, "t", "d");

        task.advance();
        assert_eq!(task.status, Status::InProgress);
        task.advance();
        assert_eq!(task.status, Status::Done);
        task.advance();
        assert_eq!(task.status, Status::ToDo);
    }

    #[test]
    fn advanced_leaves_text_untouched() {
        let task = Task::new(Status::InProgress, "title", "description").advanced();

        assert_eq!(task, Task::new(Status::Done, "title", "description"));
    }

    #[test]
    fn empty_text_is_allowed() {
        let task = Task::new(Status::ToDo, "", "");
        assert!(task.title.is_empty());
        assert!(task.description.is_empty());
    }

    #[test]
    fn serialization_roundtrip() {
        let task = Task::new(Status::Done, "stay cool", "as a cucumber");
        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(task, parsed);
        assert!(json.contains(r#""status":"done""#));
    }
}
