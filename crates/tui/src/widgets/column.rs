//! Column rendering widget.

use kancli_protocol::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, StatefulWidget, Widget},
};

use crate::column::Column;
use crate::layout::{COLUMN_PADDING_X, COLUMN_PADDING_Y};

/// Accent colour of the focused column (ANSI 256 colour 62).
pub const FOCUS_COLOR: Color = Color::Indexed(62);

/// Border drawn with blanks so an unfocused column keeps its footprint.
const HIDDEN_BORDER: border::Set = border::Set {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_top: " ",
    horizontal_bottom: " ",
};

/// Renders a column: its title, a border when focused, and its tasks.
///
/// Only the focused column highlights its selected task.
///
/// # Layout
///
/// ```text
/// ╭ To Do ─────────────╮
/// │                    │
/// │  │ buy milk        │
/// │  │ strawberry milk │
/// │                    │
/// ╰────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use kancli_protocol::Status;
/// use kancli_tui::column::Column;
/// use kancli_tui::widgets::render_column;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let column = Column::new(Status::ToDo);
/// let area = Rect::new(0, 0, 26, 10);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&column, area, &mut buf);
/// ```
pub fn render_column(column: &Column, area: Rect, buf: &mut Buffer) {
    let focused = column.is_focused();
    let (border_set, border_style, title_style) = if focused {
        (
            border::ROUNDED,
            Style::default().fg(FOCUS_COLOR),
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
        )
    } else {
        (HIDDEN_BORDER, Style::default(), Style::default().fg(Color::Gray))
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", column.status().display_name()),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(border_style)
        .padding(Padding::new(
            COLUMN_PADDING_X,
            COLUMN_PADDING_X,
            COLUMN_PADDING_Y,
            COLUMN_PADDING_Y,
        ));

    if column.tasks().is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Span::styled(
            "No items.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = column.tasks().iter().map(task_item).collect();
    let mut list = List::new(items).block(block);
    if focused {
        list = list
            .highlight_style(Style::default().fg(FOCUS_COLOR))
            .highlight_symbol("│ ");
    }

    let mut state = column.list().state();
    StatefulWidget::render(list, area, buf, &mut state);
}

/// Two-line list entry: title, then a dimmed description.
fn task_item(task: &Task) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(task.title.as_str()),
        Line::from(Span::styled(
            task.description.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}
