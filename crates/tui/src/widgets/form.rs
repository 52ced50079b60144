//! Task form rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::form::{Form, Stage};
use crate::input::TextInput;

use super::column::FOCUS_COLOR;

const PROMPT: &str = "> ";

/// Renders the form: a heading, the two fields, and a key hint.
///
/// # Layout
///
/// ```text
/// Create a new task
///
/// Title
/// > task name
///
/// Description
/// >
///
/// enter confirm • esc cancel
/// ```
pub fn render_form(form: &Form, area: Rect, buf: &mut Buffer) {
    let [heading, _, title_label, title, _, description_label, description, _, hint] =
        Layout::vertical([Constraint::Length(1); 9]).areas(area);

    let heading_text = if form.is_edit() {
        "Edit task"
    } else {
        "Create a new task"
    };
    Paragraph::new(Span::styled(
        heading_text,
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
    ))
    .render(heading, buf);

    render_label("Title", form.stage() == Stage::Title, title_label, buf);
    render_input(form.title(), title, buf);
    render_label(
        "Description",
        form.stage() == Stage::Description,
        description_label,
        buf,
    );
    render_input(form.description(), description, buf);

    let hint_text = match form.stage() {
        Stage::Title => "enter next • esc cancel • ctrl+c quit",
        Stage::Description => "enter save • esc cancel • ctrl+c quit",
    };
    Paragraph::new(Span::styled(hint_text, Style::default().fg(Color::DarkGray)))
        .render(hint, buf);
}

fn render_label(text: &str, active: bool, area: Rect, buf: &mut Buffer) {
    let style = if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Paragraph::new(Span::styled(text, style)).render(area, buf);
}

/// Renders a text field with a prompt, drawing the cursor as a reversed
/// cell when the field is focused.
fn render_input(input: &TextInput, area: Rect, buf: &mut Buffer) {
    let prompt_style = if input.is_focused() {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let body = if input.value().is_empty() {
        Span::styled(input.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(input.value())
    };
    Paragraph::new(Line::from(vec![Span::styled(PROMPT, prompt_style), body])).render(area, buf);

    if input.is_focused() {
        let offset = PROMPT.chars().count() + input.cursor_column();
        let x = u16::try_from(offset)
            .ok()
            .and_then(|offset| area.x.checked_add(offset))
            .filter(|&x| x < area.right());
        if let Some(cell) = x.and_then(|x| buf.cell_mut((x, area.y))) {
            cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
