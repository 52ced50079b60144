//! Board rendering widget.
//!
//! Lays the three columns out side by side with the help beneath them. An
//! open form replaces the whole board view.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::board::Board;
use crate::layout::{COLUMN_FRAME_HEIGHT, COLUMN_FRAME_WIDTH};

use super::column::render_column;
use super::form::render_form;
use super::help::{help_height, render_help};

/// Text shown until the terminal size is known.
pub const LOADING_TEXT: &str = "loading...";

/// Renders the board in its current state.
///
/// - quitting: nothing is drawn
/// - before the first resize: [`LOADING_TEXT`]
/// - with an open form: the form
/// - otherwise: the columns and the help
///
/// # Examples
///
/// ```
/// use kancli_protocol::{Message, seed::seed_tasks};
/// use kancli_tui::Board;
/// use kancli_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut board = Board::with_tasks(seed_tasks());
/// board.update(Message::Resize { width: 80, height: 24 });
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_board(&board, area, &mut buf);
/// ```
pub fn render_board(board: &Board, area: Rect, buf: &mut Buffer) {
    if board.is_quitting() {
        return;
    }
    if !board.is_ready() {
        Paragraph::new(Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
        return;
    }
    if let Some(form) = board.form() {
        render_form(form, area, buf);
        return;
    }

    let columns_height = board
        .columns()
        .iter()
        .map(|column| column.height() + COLUMN_FRAME_HEIGHT)
        .max()
        .unwrap_or(COLUMN_FRAME_HEIGHT);
    let [columns_area, help_area, _] = Layout::vertical([
        Constraint::Length(columns_height),
        Constraint::Length(help_height(board.full_help())),
        Constraint::Fill(1),
    ])
    .areas(area);

    let constraints = board
        .columns()
        .iter()
        .map(|column| Constraint::Length(column.width() + COLUMN_FRAME_WIDTH))
        .chain(std::iter::once(Constraint::Fill(1)));
    let column_areas = Layout::horizontal(constraints).split(columns_area);
    for (column, column_area) in board.columns().iter().zip(column_areas.iter()) {
        render_column(column, *column_area, buf);
    }

    let help_area = Rect {
        width: help_area.width.min(board.help_width()),
        ..help_area
    };
    render_help(board.full_help(), help_area, buf);
}
