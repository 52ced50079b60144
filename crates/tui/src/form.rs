//! Two-stage form for creating and editing tasks.
//!
//! A form collects a title, then a description. It never touches the board:
//! completing it yields a [`Submission`] that the board writes into the
//! target column.

use kancli_protocol::{Action, EditKey, Slot, Status, Submission, Task};
use tracing::debug;

use crate::input::TextInput;

/// Placeholder shown in the title field of a new task.
pub const TITLE_PLACEHOLDER: &str = "task name";

/// Which field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Editing the title.
    #[default]
    Title,
    /// Editing the description.
    Description,
}

/// Result of feeding an action to a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The form is still collecting input.
    Pending,
    /// Both fields were confirmed.
    Submitted(Submission),
    /// The user backed out; nothing is produced.
    Cancelled,
    /// The user asked to quit the application.
    Quit,
}

/// A task form bound to a target column and slot.
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Action, EditKey, Slot, Status};
/// use kancli_tui::form::{Form, FormOutcome};
///
/// let mut form = Form::create(Status::ToDo);
/// form.on_edit(EditKey::Char('x'));
/// assert_eq!(form.on_action(Action::Confirm), FormOutcome::Pending);
///
/// let FormOutcome::Submitted(submission) = form.on_action(Action::Confirm) else {
///     panic!("form should complete");
/// };
/// assert_eq!(submission.task.title, "x");
/// assert_eq!(submission.slot, Slot::Append);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    stage: Stage,
    title: TextInput,
    description: TextInput,
    status: Status,
    slot: Slot,
}

impl Form {
    /// Opens an empty form that appends a new task to `status`.
    #[must_use]
    pub fn create(status: Status) -> Self {
        Self::build(
            status,
            Slot::Append,
            TextInput::new().with_placeholder(TITLE_PLACEHOLDER),
            TextInput::new(),
        )
    }

    /// Opens a form pre-filled from `task` that replaces position `index`.
    #[must_use]
    pub fn edit(status: Status, index: usize, task: &Task) -> Self {
        Self::build(
            status,
            Slot::At(index),
            TextInput::new()
                .with_value(task.title.clone())
                .with_placeholder(TITLE_PLACEHOLDER),
            TextInput::new().with_value(task.description.clone()),
        )
    }

    fn build(status: Status, slot: Slot, mut title: TextInput, description: TextInput) -> Self {
        title.focus();
        Self {
            stage: Stage::Title,
            title,
            description,
            status,
            slot,
        }
    }

    /// Returns the field currently being edited.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the title field.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// Returns the description field.
    #[must_use]
    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// Returns the column the produced task is written to.
    #[must_use]
    pub fn target_status(&self) -> Status {
        self.status
    }

    /// Returns where the produced task is written.
    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns `true` when the form replaces an existing task.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        !self.slot.is_append()
    }

    /// Handles a logical action.
    ///
    /// Confirm advances from title to description, then completes. Back
    /// cancels at either stage. Other actions are not meaningful to a text
    /// field and are ignored.
    pub fn on_action(&mut self, action: Action) -> FormOutcome {
        match action {
            Action::Confirm => match self.stage {
                Stage::Title => {
                    self.title.blur();
                    self.description.focus();
                    self.stage = Stage::Description;
                    FormOutcome::Pending
                }
                Stage::Description => FormOutcome::Submitted(self.submission()),
            },
            Action::Back => {
                debug!(status = %self.status, "form cancelled");
                FormOutcome::Cancelled
            }
            action if action.is_terminating() => FormOutcome::Quit,
            _ => FormOutcome::Pending,
        }
    }

    /// Forwards a text keystroke to the focused field.
    pub fn on_edit(&mut self, key: EditKey) {
        match self.stage {
            Stage::Title => self.title.handle(key),
            Stage::Description => self.description.handle(key),
        }
    }

    fn submission(&self) -> Submission {
        Submission {
            task: Task::new(self.status, self.title.value(), self.description.value()),
            slot: self.slot,
        }
    }
}
