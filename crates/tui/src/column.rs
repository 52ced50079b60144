//! A single board column.
//!
//! A column owns the tasks of one [`Status`] and knows whether it has focus.
//! It reacts to the actions that concern its own tasks; anything that
//! crosses columns is returned to the board as a [`ColumnOutcome`].

use kancli_protocol::{Action, MoveEvent, Slot, Status, Task};
use tracing::{debug, warn};

use crate::form::Form;
use crate::layout::{HEIGHT_DIVISOR, MARGIN};
use crate::list::TaskList;

/// What the board must do after a column handled an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// Nothing beyond the column changed.
    Idle,
    /// A task left the column and must be appended to the next one.
    Moved(MoveEvent),
    /// A form should take over input.
    OpenForm(Form),
}

/// One of the three board columns.
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Slot, Status, Task};
/// use kancli_tui::column::Column;
///
/// let mut column = Column::new(Status::InProgress);
/// column.insert_or_replace(Slot::Append, Task::new(Status::InProgress, "write code", ""));
///
/// let event = column.move_selected_forward().unwrap();
/// assert_eq!(event.task.status, Status::Done);
/// assert!(column.tasks().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    status: Status,
    focused: bool,
    list: TaskList,
    width: u16,
    height: u16,
}

impl Column {
    /// Creates an empty column. Only the To Do column starts focused.
    #[must_use]
    pub fn new(status: Status) -> Self {
        Self {
            status,
            focused: status == Status::ToDo,
            list: TaskList::new(),
            width: 0,
            height: 0,
        }
    }

    /// Returns the status every task in this column carries.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Marks the column as the one receiving board actions.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Clears the focus flag.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` if the column has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.list.items()
    }

    /// Returns the underlying list with its selection state.
    #[must_use]
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Returns the selected position, `None` when the column is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    /// Returns how many tasks the column holds.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.list.len()
    }

    /// Width of the task list, set by the last resize.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the task list, set by the last resize.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Replaces all tasks at once.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.list.set_items(tasks);
    }

    /// Writes a task at `slot`.
    ///
    /// [`Slot::Append`] pushes to the end. [`Slot::At`] replaces the task at
    /// that position; an out-of-range position drops the task and logs a
    /// warning.
    pub fn insert_or_replace(&mut self, slot: Slot, task: Task) {
        match slot {
            Slot::Append => self.list.push(task),
            Slot::At(index) => {
                if self.list.replace_at(index, task).is_none() {
                    warn!(
                        status = %self.status,
                        index,
                        len = self.list.len(),
                        "replace index out of range, task dropped"
                    );
                }
            }
        }
    }

    /// Removes the selected task. No-op on an empty column.
    pub fn delete_selected(&mut self) {
        if let Some(index) = self.list.selected_index() {
            self.list.remove_at(index);
        }
    }

    /// Takes the selected task out and advances its status.
    ///
    /// Returns `None` on an empty column.
    pub fn move_selected_forward(&mut self) -> Option<MoveEvent> {
        let index = self.list.selected_index()?;
        let task = self.list.remove_at(index)?.advanced();
        debug!(from = %self.status, to = %task.status, title = %task.title, "task moved");
        Some(MoveEvent { task })
    }

    /// Sizes the column from the terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width / MARGIN;
        self.height = height / HEIGHT_DIVISOR;
        self.list.set_visible_size(self.width, self.height);
    }

    /// Handles an action routed to this column.
    pub fn update(&mut self, action: Action) -> ColumnOutcome {
        match action {
            Action::New => {
                debug!(status = %self.status, "opening new task form");
                ColumnOutcome::OpenForm(Form::create(self.status))
            }
            Action::Edit => match (self.list.selected_index(), self.list.selected()) {
                (Some(index), Some(task)) => {
                    debug!(status = %self.status, index, "opening edit form");
                    ColumnOutcome::OpenForm(Form::edit(self.status, index, task))
                }
                _ => ColumnOutcome::Idle,
            },
            Action::Delete => {
                self.delete_selected();
                ColumnOutcome::Idle
            }
            Action::Confirm => self
                .move_selected_forward()
                .map_or(ColumnOutcome::Idle, ColumnOutcome::Moved),
            Action::Up => {
                self.list.select_previous();
                ColumnOutcome::Idle
            }
            Action::Down => {
                self.list.select_next();
                ColumnOutcome::Idle
            }
            _ => ColumnOutcome::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_with(status: Status, titles: &[&str]) -> Column {
        let mut column = Column::new(status);
        for title in titles {
            column.insert_or_replace(Slot::Append, Task::new(status, *title, ""));
        }
        column
    }

    fn titles(column: &Column) -> Vec<&str> {
        column.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn only_todo_starts_focused() {
        assert!(Column::new(Status::ToDo).is_focused());
        assert!(!Column::new(Status::InProgress).is_focused());
        assert!(!Column::new(Status::Done).is_focused());
    }

    #[test]
    fn insert_appends_and_replaces() {
        let mut column = column_with(Status::ToDo, &["a", "b"]);
        column.insert_or_replace(Slot::At(1), Task::new(Status::ToDo, "c", ""));
        assert_eq!(titles(&column), ["a", "c"]);
    }

    #[test]
    fn replace_out_of_range_is_noop() {
        let mut column = column_with(Status::ToDo, &["a"]);
        column.insert_or_replace(Slot::At(4), Task::new(Status::ToDo, "z", ""));
        assert_eq!(titles(&column), ["a"]);
    }

    #[test]
    fn empty_column_operations_are_noops() {
        let mut column = Column::new(Status::Done);
        column.delete_selected();
        assert_eq!(column.move_selected_forward(), None);
        assert_eq!(column.update(Action::Edit), ColumnOutcome::Idle);
        assert_eq!(column.update(Action::Confirm), ColumnOutcome::Idle);
        assert_eq!(column.selected_index(), None);
        assert_eq!(column.visible_count(), 0);
    }

    #[test]
    fn move_forward_wraps_from_done() {
        let mut column = column_with(Status::Done, &["stay cool"]);
        let event = column.move_selected_forward();
        assert_eq!(
            event,
            Some(MoveEvent {
                task: Task::new(Status::ToDo, "stay cool", "")
            })
        );
        assert_eq!(column.visible_count(), 0);
    }

    #[test]
    fn move_forward_keeps_text() {
        let mut column = Column::new(Status::InProgress);
        column.set_tasks(vec![
            Task::new(Status::InProgress, "write code", "don't worry, it's Rust"),
            Task::new(Status::InProgress, "review", ""),
        ]);

        let event = column.move_selected_forward();
        assert_eq!(
            event,
            Some(MoveEvent {
                task: Task::new(Status::Done, "write code", "don't worry, it's Rust")
            })
        );
        assert_eq!(titles(&column), ["review"]);
    }

    #[test]
    fn delete_removes_selected() {
        let mut column = column_with(Status::ToDo, &["a", "b", "c"]);
        column.update(Action::Down);
        column.update(Action::Delete);
        assert_eq!(titles(&column), ["a", "c"]);
        assert_eq!(column.selected_index(), Some(1));
    }

    #[test]
    fn resize_divides_terminal() {
        let mut column = Column::new(Status::ToDo);
        column.resize(80, 24);
        assert_eq!(column.width(), 20);
        assert_eq!(column.height(), 12);
        assert_eq!(column.list().width(), 20);
    }

    #[test]
    fn new_and_edit_open_forms() {
        let mut column = column_with(Status::InProgress, &["write code"]);

        let ColumnOutcome::OpenForm(form) = column.update(Action::New) else {
            panic!("expected a form");
        };
        assert!(!form.is_edit());
        assert_eq!(form.target_status(), Status::InProgress);

        let ColumnOutcome::OpenForm(form) = column.update(Action::Edit) else {
            panic!("expected a form");
        };
        assert_eq!(form.slot(), Slot::At(0));
        assert_eq!(form.title().value(), "write code");
    }

    #[test]
    fn confirm_emits_move() {
        let mut column = column_with(Status::ToDo, &["buy milk"]);
        let outcome = column.update(Action::Confirm);
        assert_eq!(
            outcome,
            ColumnOutcome::Moved(MoveEvent {
                task: Task::new(Status::InProgress, "buy milk", "")
            })
        );
    }

    #[test]
    fn unrelated_actions_are_ignored() {
        let mut column = column_with(Status::ToDo, &["a"]);
        let before = column.clone();
        for action in [Action::Left, Action::Right, Action::Help, Action::Quit, Action::Back] {
            assert_eq!(column.update(action), ColumnOutcome::Idle);
        }
        assert_eq!(column, before);
    }
}
