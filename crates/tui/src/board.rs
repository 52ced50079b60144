//! Board state: three columns, focus, and the active form.
//!
//! [`Board::update`] is the single entry point for every [`Message`]. It may
//! return one follow-up message, which must be fed back before new input is
//! read:
//!
//! ```
//! use kancli_protocol::{Action, Message, Status, Task};
//! use kancli_tui::Board;
//!
//! let mut board = Board::with_tasks(vec![Task::new(Status::ToDo, "buy milk", "")]);
//!
//! let mut next = Some(Message::Action(Action::Confirm));
//! while let Some(msg) = next {
//!     next = board.update(msg);
//! }
//! assert_eq!(board.column(Status::InProgress).tasks().len(), 1);
//! ```

use kancli_protocol::{Action, Message, MoveEvent, Slot, Status, Submission, Task};
use tracing::{debug, info};

use crate::column::{Column, ColumnOutcome};
use crate::form::{Form, FormOutcome};
use crate::layout::MARGIN;

/// Who receives key and edit input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputOwner {
    /// The focused column.
    #[default]
    Columns,
    /// An open task form.
    Form(Form),
}

/// The kanban board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; Status::COUNT],
    focused: Status,
    owner: InputOwner,
    ready: bool,
    quitting: bool,
    help_width: u16,
    full_help: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with three empty columns and To Do focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Status::all().map(Column::new),
            focused: Status::ToDo,
            owner: InputOwner::Columns,
            ready: false,
            quitting: false,
            help_width: 0,
            full_help: false,
        }
    }

    /// Creates a board holding `tasks`, each placed in the column of its
    /// status in the given order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut grouped: [Vec<Task>; Status::COUNT] = Default::default();
        for task in tasks {
            grouped[task.status.index()].push(task);
        }

        let mut board = Self::new();
        for (column, tasks) in board.columns.iter_mut().zip(grouped) {
            column.set_tasks(tasks);
        }
        board
    }

    /// Sets whether the help panel starts expanded.
    #[must_use]
    pub fn with_full_help(mut self, full_help: bool) -> Self {
        self.full_help = full_help;
        self
    }

    /// Returns the column holding tasks of `status`.
    #[must_use]
    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.index()]
    }

    /// Returns all columns in status order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the status of the focused column.
    #[must_use]
    pub fn focused(&self) -> Status {
        self.focused
    }

    /// Returns who currently receives input.
    #[must_use]
    pub fn owner(&self) -> &InputOwner {
        &self.owner
    }

    /// Returns the open form, if one owns input.
    #[must_use]
    pub fn form(&self) -> Option<&Form> {
        match &self.owner {
            InputOwner::Form(form) => Some(form),
            InputOwner::Columns => None,
        }
    }

    /// Returns `true` once the first resize has been seen.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns `true` once a quit was requested.
    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Width available to the help line.
    #[must_use]
    pub fn help_width(&self) -> u16 {
        self.help_width
    }

    /// Returns `true` while the full help is shown.
    #[must_use]
    pub fn full_help(&self) -> bool {
        self.full_help
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::visible_count).sum()
    }

    /// Processes one message, returning at most one follow-up.
    pub fn update(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::Resize { width, height } => {
                self.resize(width, height);
                None
            }
            Message::FormSubmitted(submission) => {
                self.apply_submission(submission);
                None
            }
            Message::TaskMoved(MoveEvent { task }) => {
                self.columns[task.status.index()].insert_or_replace(Slot::Append, task);
                None
            }
            Message::Action(action) => self.handle_action(action),
            Message::Edit(key) => {
                if let InputOwner::Form(form) = &mut self.owner {
                    form.on_edit(key);
                }
                None
            }
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.help_width = width.saturating_sub(MARGIN);
        for column in &mut self.columns {
            column.resize(width, height);
        }
        if !self.ready {
            debug!(width, height, "board ready");
        }
        self.ready = true;
    }

    fn apply_submission(&mut self, submission: Submission) {
        let Submission { task, slot } = submission;
        debug!(status = %task.status, ?slot, title = %task.title, "form submitted");
        self.columns[task.status.index()].insert_or_replace(slot, task);
    }

    fn handle_action(&mut self, action: Action) -> Option<Message> {
        if let InputOwner::Form(form) = &mut self.owner {
            let outcome = form.on_action(action);
            return self.finish_form(outcome);
        }

        match action {
            action if action.is_terminating() => {
                self.quit();
                None
            }
            Action::Left => {
                self.change_focus(self.focused.prev());
                None
            }
            Action::Right => {
                self.change_focus(self.focused.next());
                None
            }
            Action::Help => {
                self.full_help = !self.full_help;
                None
            }
            _ => match self.columns[self.focused.index()].update(action) {
                ColumnOutcome::Idle => None,
                ColumnOutcome::Moved(event) => Some(Message::TaskMoved(event)),
                ColumnOutcome::OpenForm(form) => {
                    self.owner = InputOwner::Form(form);
                    None
                }
            },
        }
    }

    fn finish_form(&mut self, outcome: FormOutcome) -> Option<Message> {
        match outcome {
            FormOutcome::Pending => None,
            FormOutcome::Submitted(submission) => {
                self.owner = InputOwner::Columns;
                Some(Message::FormSubmitted(submission))
            }
            FormOutcome::Cancelled => {
                self.owner = InputOwner::Columns;
                None
            }
            FormOutcome::Quit => {
                self.quit();
                None
            }
        }
    }

    fn change_focus(&mut self, target: Status) {
        self.columns[self.focused.index()].blur();
        self.columns[target.index()].focus();
        debug!(from = %self.focused, to = %target, "focus changed");
        self.focused = target;
    }

    fn quit(&mut self) {
        info!(tasks = self.total_tasks(), "quitting");
        self.quitting = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kancli_protocol::EditKey;
    use kancli_protocol::seed::seed_tasks;

    fn drive(board: &mut Board, msg: impl Into<Message>) {
        let mut next = Some(msg.into());
        while let Some(msg) = next {
            next = board.update(msg);
        }
    }

    fn type_text(board: &mut Board, text: &str) {
        for ch in text.chars() {
            drive(board, EditKey::Char(ch));
        }
    }

    fn titles(board: &Board, status: Status) -> Vec<String> {
        board
            .column(status)
            .tasks()
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    fn focused_columns(board: &Board) -> Vec<Status> {
        board
            .columns()
            .iter()
            .filter(|c| c.is_focused())
            .map(Column::status)
            .collect()
    }

    #[test]
    fn new_board_is_not_ready() {
        let board = Board::new();
        assert!(!board.is_ready());
        assert!(!board.is_quitting());
        assert_eq!(board.focused(), Status::ToDo);
        assert_eq!(focused_columns(&board), [Status::ToDo]);
    }

    #[test]
    fn columns_are_indexed_by_status() {
        let board = Board::new();
        for status in Status::all() {
            assert_eq!(board.column(status).status(), status);
        }
    }

    #[test]
    fn with_tasks_groups_by_status() {
        let board = Board::with_tasks(seed_tasks());
        assert_eq!(titles(&board, Status::ToDo), ["buy milk"]);
        assert_eq!(titles(&board, Status::InProgress), ["write code"]);
        assert_eq!(titles(&board, Status::Done), ["stay cool"]);
    }

    #[test]
    fn resize_makes_board_ready() {
        let mut board = Board::new();
        assert_eq!(board.update(Message::Resize { width: 80, height: 24 }), None);
        assert!(board.is_ready());
        assert_eq!(board.help_width(), 76);
        assert!(board.columns().iter().all(|c| c.width() == 20 && c.height() == 12));
    }

    #[test]
    fn resize_narrower_than_margin_saturates() {
        let mut board = Board::new();
        board.update(Message::Resize { width: 2, height: 1 });
        assert_eq!(board.help_width(), 0);
    }

    #[test]
    fn three_rights_return_to_start() {
        let mut board = Board::new();
        drive(&mut board, Action::Right);
        assert_eq!(board.focused(), Status::InProgress);
        drive(&mut board, Action::Right);
        drive(&mut board, Action::Right);
        assert_eq!(board.focused(), Status::ToDo);
        assert_eq!(focused_columns(&board), [Status::ToDo]);
    }

    #[test]
    fn left_from_todo_wraps_to_done() {
        let mut board = Board::new();
        drive(&mut board, Action::Left);
        assert_eq!(board.focused(), Status::Done);
        assert_eq!(focused_columns(&board), [Status::Done]);
    }

    #[test]
    fn confirm_returns_move_follow_up() {
        let mut board = Board::with_tasks(seed_tasks());
        let follow_up = board.update(Message::Action(Action::Confirm));

        assert_eq!(
            follow_up,
            Some(Message::TaskMoved(MoveEvent {
                task: Task::new(Status::InProgress, "buy milk", "strawberry milk"),
            }))
        );
        // Not yet delivered.
        assert_eq!(board.total_tasks(), 2);

        assert_eq!(board.update(follow_up.unwrap()), None);
        assert_eq!(titles(&board, Status::InProgress), ["write code", "buy milk"]);
        assert_eq!(board.total_tasks(), 3);
    }

    #[test]
    fn move_from_done_wraps_to_todo() {
        let mut board = Board::with_tasks(seed_tasks());
        drive(&mut board, Action::Left);
        drive(&mut board, Action::Confirm);

        assert!(titles(&board, Status::Done).is_empty());
        assert_eq!(titles(&board, Status::ToDo), ["buy milk", "stay cool"]);
        assert_eq!(board.column(Status::ToDo).tasks()[1].status, Status::ToDo);
    }

    #[test]
    fn create_form_round_trip() {
        let mut board = Board::new();
        assert_eq!(board.owner(), &InputOwner::Columns);
        drive(&mut board, Action::New);
        assert!(matches!(
            board.owner(),
            InputOwner::Form(form) if form.target_status() == Status::ToDo && !form.is_edit()
        ));

        type_text(&mut board, "buy milk");
        drive(&mut board, Action::Confirm);
        type_text(&mut board, "strawberry milk");
        drive(&mut board, Action::Confirm);

        assert_eq!(board.owner(), &InputOwner::Columns);
        assert_eq!(
            board.column(Status::ToDo).tasks(),
            [Task::new(Status::ToDo, "buy milk", "strawberry milk")]
        );
    }

    #[test]
    fn edit_form_replaces_in_place() {
        let mut board = Board::with_tasks(seed_tasks());
        drive(&mut board, Action::Right);
        drive(&mut board, Action::Edit);
        drive(&mut board, Action::Confirm);
        drive(&mut board, EditKey::End);
        for _ in 0.."don't worry, it's Rust".len() {
            drive(&mut board, EditKey::Backspace);
        }
        type_text(&mut board, "ship it");
        drive(&mut board, Action::Confirm);

        assert_eq!(
            board.column(Status::InProgress).tasks(),
            [Task::new(Status::InProgress, "write code", "ship it")]
        );
    }

    #[test]
    fn keys_go_to_form_while_open() {
        let mut board = Board::with_tasks(seed_tasks());
        drive(&mut board, Action::New);

        drive(&mut board, Action::Right);
        drive(&mut board, Action::Delete);
        drive(&mut board, Action::Help);

        assert_eq!(board.focused(), Status::ToDo);
        assert_eq!(board.total_tasks(), 3);
        assert!(!board.full_help());
        assert!(board.form().is_some());
    }

    #[test]
    fn edit_keys_without_form_are_ignored() {
        let mut board = Board::with_tasks(seed_tasks());
        let before = board.clone();
        drive(&mut board, EditKey::Char('x'));
        assert_eq!(board, before);
    }

    #[test]
    fn back_cancels_form_without_changes() {
        let mut board = Board::with_tasks(seed_tasks());
        let before = board.columns().to_vec();

        drive(&mut board, Action::Edit);
        type_text(&mut board, "changed");
        drive(&mut board, Action::Confirm);
        drive(&mut board, Action::Back);

        assert!(board.form().is_none());
        assert_eq!(board.columns(), before.as_slice());
    }

    #[test]
    fn resize_still_handled_while_form_open() {
        let mut board = Board::new();
        drive(&mut board, Action::New);
        drive(&mut board, Message::Resize { width: 100, height: 40 });
        assert!(board.is_ready());
        assert!(board.form().is_some());
    }

    #[test]
    fn quit_from_board_and_form() {
        let mut board = Board::new();
        drive(&mut board, Action::Quit);
        assert!(board.is_quitting());

        let mut board = Board::new();
        drive(&mut board, Action::New);
        drive(&mut board, Action::Quit);
        assert!(board.is_quitting());
    }

    #[test]
    fn help_toggles() {
        let mut board = Board::new().with_full_help(true);
        drive(&mut board, Action::Help);
        assert!(!board.full_help());
        drive(&mut board, Action::Help);
        assert!(board.full_help());
    }

    #[test]
    fn submission_to_missing_index_is_dropped() {
        let mut board = Board::new();
        board.update(Message::FormSubmitted(Submission {
            task: Task::new(Status::Done, "ghost", ""),
            slot: Slot::At(3),
        }));
        assert_eq!(board.total_tasks(), 0);
    }
}
