//! Demo tasks for a fresh board.
//!
//! # Examples
//!
//! ```
//! use kancli_protocol::seed::seed_tasks;
//!
//! assert_eq!(seed_tasks().len(), 3);
//! ```

use crate::status::Status;
use crate::task::Task;

/// Returns one sample task for each column, in column order.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(Status::ToDo, "buy milk", "strawberry milk"),
        Task::new(Status::InProgress, "write code", "don't worry, it's Rust"),
        Task::new(Status::Done, "stay cool", "as a cucumber"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_task_per_status() {
        let tasks = seed_tasks();

        for (task, status) in tasks.iter().zip(Status::all()) {
            assert_eq!(task.status, status);
        }
    }

    #[test]
    fn seed_tasks_have_text() {
        for task in seed_tasks() {
            assert!(!task.title.is_empty());
            assert!(!task.description.is_empty());
        }
    }
}
