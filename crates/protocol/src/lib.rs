//! Shared types for the kancli application.
//!
//! This crate defines the data model of the board: the cyclic [`Status`]
//! of a task, the [`Task`] record itself, and the logical input
//! [`Action`]s and [`Message`]s the board reacts to.
//!
//! # Overview
//!
//! - [`status`]: The three workflow stages and their cyclic ordering
//! - [`task`]: The `Task` record
//! - [`action`]: Logical input actions
//! - [`message`]: Messages the board processes, including move and form events
//! - [`seed`]: Demo tasks for a fresh board
//!
//! # Examples
//!
//! ```
//! use kancli_protocol::{Status, Task};
//!
//! let mut task = Task::new(Status::InProgress, "write code", "ship it");
//! task.advance();
//! assert_eq!(task.status, Status::Done);
//! ```

pub mod action;
pub mod message;
pub mod seed;
pub mod status;
pub mod task;

// Re-export primary types at crate root for convenience
pub use action::Action;
pub use message::{EditKey, Message, MoveEvent, Slot, Submission};
pub use status::Status;
pub use task::Task;
