//! Task status and its cyclic ordering.
//!
//! A [`Status`] identifies both where a task sits in the workflow and which
//! column of the board holds it. The three statuses form a cycle: advancing
//! past `Done` wraps back to `ToDo`.

use serde::{Deserialize, Serialize};

/// The workflow stage of a task, and the identity of a board column.
///
/// # Examples
///
/// ```
/// use kancli_protocol::Status;
///
/// let status = Status::InProgress;
/// assert_eq!(status.display_name(), "In Progress");
/// assert_eq!(status.next(), Status::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work that has not started yet.
    #[default]
    ToDo,
    /// Work currently being done.
    InProgress,
    /// Finished work.
    Done,
}

impl Status {
    /// Number of statuses, and therefore of board columns.
    pub const COUNT: usize = 3;

    /// Returns all statuses in workflow order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], Status::ToDo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::ToDo, Self::InProgress, Self::Done]
    }

    /// Returns the column title for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Status;
    ///
    /// assert_eq!(Status::ToDo.display_name(), "To Do");
    /// assert_eq!(Status::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the position of this status in the workflow (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `Status` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Status;
    ///
    /// assert_eq!(Status::from_index(1), Some(Status::InProgress));
    /// assert_eq!(Status::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ToDo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the following status, wrapping from `Done` to `ToDo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Status;
    ///
    /// assert_eq!(Status::ToDo.next(), Status::InProgress);
    /// assert_eq!(Status::Done.next(), Status::ToDo);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ToDo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// Returns the preceding status, wrapping from `ToDo` to `Done`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kancli_protocol::Status;
    ///
    /// assert_eq!(Status::Done.prev(), Status::InProgress);
    /// assert_eq!(Status::ToDo.prev(), Status::Done);
    /// ```
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::InProgress => Self::ToDo,
            Self::Done => Self::InProgress,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::ToDo),
            Just(Status::InProgress),
            Just(Status::Done),
        ]
    }

    #[test]
    fn all_returns_three_statuses_in_order() {
        let all = Status::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Status::ToDo);
        assert_eq!(all[1], Status::InProgress);
        assert_eq!(all[2], Status::Done);
    }

    #[test]
    fn index_roundtrip() {
        for status in Status::all() {
            assert_eq!(Status::from_index(status.index()), Some(status));
        }
    }

    #[test]
    fn ordering_follows_workflow() {
        assert!(Status::ToDo < Status::InProgress);
        assert!(Status::InProgress < Status::Done);
    }

    #[test]
    fn navigation_wraps_around() {
        assert_eq!(Status::ToDo.next(), Status::InProgress);
        assert_eq!(Status::InProgress.next(), Status::Done);
        assert_eq!(Status::Done.next(), Status::ToDo);

        assert_eq!(Status::ToDo.prev(), Status::Done);
        assert_eq!(Status::InProgress.prev(), Status::ToDo);
        assert_eq!(Status::Done.prev(), Status::InProgress);
    }

    #[test]
    fn default_is_to_do() {
        assert_eq!(Status::default(), Status::ToDo);
    }

    #[test]
    fn display_uses_column_title() {
        assert_eq!(Status::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn json_format() {
        let json = serde_json::to_string(&Status::InProgress).expect("serialize");
        assert_eq!(json, r#""in_progress""#);

        let json = serde_json::to_string(&Status::ToDo).expect("serialize");
        assert_eq!(json, r#""to_do""#);
    }

    proptest! {
        #[test]
        fn prev_undoes_next(status in any_status()) {
            prop_assert_eq!(status.next().prev(), status);
            prop_assert_eq!(status.prev().next(), status);
        }

        #[test]
        fn three_steps_return_to_start(status in any_status()) {
            prop_assert_eq!(status.next().next().next(), status);
            prop_assert_eq!(status.prev().prev().prev(), status);
        }

        #[test]
        fn next_never_stays_put(status in any_status()) {
            prop_assert_ne!(status.next(), status);
        }
    }
}
