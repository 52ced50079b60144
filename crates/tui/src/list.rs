//! Selectable task list backing a column.
//!
//! [`TaskList`] pairs the column's tasks with a ratatui [`ListState`] so the
//! selection survives between frames. The list never leaves the selection
//! pointing past the last item.

use kancli_protocol::Task;
use ratatui::widgets::ListState;

/// An ordered list of tasks with a cursor.
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Status, Task};
/// use kancli_tui::list::TaskList;
///
/// let mut list = TaskList::new();
/// assert_eq!(list.selected_index(), None);
///
/// list.insert_at(0, Task::new(Status::ToDo, "buy milk", "strawberry milk"));
/// assert_eq!(list.selected_index(), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
    state: ListState,
    width: u16,
    height: u16,
}

impl TaskList {
    /// Creates an empty list with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every item, selecting the first one (if any).
    pub fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
        let selected = if self.items.is_empty() { None } else { Some(0) };
        self.state = ListState::default().with_selected(selected);
    }

    /// Returns the items in display order.
    #[must_use]
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the cursor position, or `None` when the list is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected().filter(|&index| index < self.items.len())
    }

    /// Returns the task under the cursor.
    #[must_use]
    pub fn selected(&self) -> Option<&Task> {
        self.selected_index().and_then(|index| self.items.get(index))
    }

    /// Inserts a task at `index`, clamped to the end of the list.
    ///
    /// The cursor stays where it was, except that inserting into an empty
    /// list selects the new item.
    pub fn insert_at(&mut self, index: usize, task: Task) {
        let index = index.min(self.items.len());
        self.items.insert(index, task);
        if self.selected_index().is_none() {
            self.state.select(Some(0));
        }
    }

    /// Appends a task after the last item.
    pub fn push(&mut self, task: Task) {
        self.insert_at(self.items.len(), task);
    }

    /// Replaces the task at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of
    /// range.
    pub fn replace_at(&mut self, index: usize, task: Task) -> Option<Task> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, task))
    }

    /// Removes the task at `index`, keeping the cursor on a valid item.
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        let selected = match (self.items.len(), self.state.selected()) {
            (0, _) => None,
            (len, Some(current)) => Some(current.min(len - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selected);
        Some(removed)
    }

    /// Moves the cursor down one item, stopping at the last.
    pub fn select_next(&mut self) {
        if let Some(current) = self.selected_index() {
            let last = self.items.len() - 1;
            self.state.select(Some((current + 1).min(last)));
        }
    }

    /// Moves the cursor up one item, stopping at the first.
    pub fn select_previous(&mut self) {
        if let Some(current) = self.selected_index() {
            self.state.select(Some(current.saturating_sub(1)));
        }
    }

    /// Records the size the list is drawn at.
    pub fn set_visible_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Returns the width the list is drawn at.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height the list is drawn at.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns a copy of the selection state for stateful rendering.
    #[must_use]
    pub fn state(&self) -> ListState {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kancli_protocol::Status;

    fn task(title: &str) -> Task {
        Task::new(Status::ToDo, title, "")
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.items().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn empty_list_has_no_selection() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.selected_index(), None);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn set_items_selects_first() {
        let mut list = TaskList::new();
        list.set_items(vec![task("a"), task("b")]);
        assert_eq!(list.selected_index(), Some(0));

        list.set_items(Vec::new());
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn insert_at_clamps_to_end() {
        let mut list = TaskList::new();
        list.insert_at(5, task("a"));
        list.insert_at(0, task("b"));
        list.push(task("c"));
        assert_eq!(titles(&list), ["b", "a", "c"]);
    }

    #[test]
    fn replace_at_out_of_range_is_ignored() {
        let mut list = TaskList::new();
        list.push(task("a"));

        assert_eq!(list.replace_at(3, task("z")), None);
        assert_eq!(titles(&list), ["a"]);

        assert_eq!(list.replace_at(0, task("b")), Some(task("a")));
        assert_eq!(titles(&list), ["b"]);
    }

    #[test]
    fn remove_last_item_pulls_cursor_back() {
        let mut list = TaskList::new();
        list.set_items(vec![task("a"), task("b"), task("c")]);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), Some(2));

        assert_eq!(list.remove_at(2), Some(task("c")));
        assert_eq!(list.selected_index(), Some(1));

        list.remove_at(1);
        list.remove_at(0);
        assert_eq!(list.selected_index(), None);
        assert_eq!(list.remove_at(0), None);
    }

    #[test]
    fn selection_stops_at_bounds() {
        let mut list = TaskList::new();
        list.set_items(vec![task("a"), task("b")]);

        list.select_previous();
        assert_eq!(list.selected_index(), Some(0));

        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(list.selected().map(|t| t.title.as_str()), Some("b"));
    }

    #[test]
    fn selection_on_empty_list_is_noop() {
        let mut list = TaskList::new();
        list.select_next();
        list.select_previous();
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn visible_size_is_recorded() {
        let mut list = TaskList::new();
        list.set_visible_size(20, 12);
        assert_eq!((list.width(), list.height()), (20, 12));
    }
}
