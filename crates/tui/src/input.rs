//! Single-line text input used by the task form.

use kancli_protocol::EditKey;

/// A single-line text field with a cursor.
///
/// The cursor is a byte offset into the value and always sits on a char
/// boundary. An unfocused field ignores input.
///
/// # Examples
///
/// ```
/// use kancli_protocol::EditKey;
/// use kancli_tui::input::TextInput;
///
/// let mut input = TextInput::new().with_placeholder("task name");
/// input.focus();
/// input.handle(EditKey::Char('h'));
/// input.handle(EditKey::Char('i'));
/// assert_eq!(input.value(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    placeholder: String,
    focused: bool,
}

impl TextInput {
    /// Creates an empty, unfocused field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial value and moves the cursor to its end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.len();
        self
    }

    /// Sets the hint shown while the field is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Makes the field accept edit keys.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Stops the field from accepting edit keys.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` if the field accepts edit keys.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the hint shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the cursor position as a byte offset into [`Self::value`].
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the cursor position counted in characters.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Applies one editing keystroke. Does nothing while unfocused.
    pub fn handle(&mut self, key: EditKey) {
        if !self.focused {
            return;
        }
        match key {
            EditKey::Char(ch) => {
                self.value.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
            }
            EditKey::Backspace => {
                if let Some(start) = self.prev_boundary() {
                    self.value.replace_range(start..self.cursor, "");
                    self.cursor = start;
                }
            }
            EditKey::Delete => {
                if let Some(end) = self.next_boundary() {
                    self.value.replace_range(self.cursor..end, "");
                }
            }
            EditKey::Left => {
                if let Some(start) = self.prev_boundary() {
                    self.cursor = start;
                }
            }
            EditKey::Right => {
                if let Some(end) = self.next_boundary() {
                    self.cursor = end;
                }
            }
            EditKey::Home => self.cursor = 0,
            EditKey::End => self.cursor = self.value.len(),
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(index, _)| index)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}
