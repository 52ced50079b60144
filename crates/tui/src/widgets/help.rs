//! Key binding help shown beneath the board.
//!
//! The short form is a single line. The full form lays the bindings out in
//! columns of related keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key and what it does.
type Binding = (&'static str, &'static str);

const SHORT_HELP: &[Binding] = &[("?", "toggle help"), ("q", "quit")];

const FULL_HELP: &[&[Binding]] = &[
    &[("↑/k", "up"), ("↓/j", "down")],
    &[("←/h", "left"), ("→/l", "right")],
    &[("n", "new"), ("e", "edit"), ("d", "delete")],
    &[("enter", "move"), ("esc", "back")],
    &[("?", "toggle help"), ("q", "quit")],
];

const SHORT_SEPARATOR: &str = " • ";
const COLUMN_SEPARATOR: &str = "    ";

/// Returns the number of rows the help occupies.
#[must_use]
pub fn help_height(full: bool) -> u16 {
    if full {
        let rows = FULL_HELP.iter().map(|group| group.len()).max().unwrap_or(1);
        u16::try_from(rows).unwrap_or(u16::MAX)
    } else {
        1
    }
}

/// Renders the help into `area`, clipped to its width.
///
/// # Examples
///
/// ```
/// use kancli_tui::widgets::render_help;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 76, 1);
/// let mut buf = Buffer::empty(area);
/// render_help(false, area, &mut buf);
/// ```
pub fn render_help(full: bool, area: Rect, buf: &mut Buffer) {
    let lines = if full { full_lines() } else { vec![short_line()] };
    Paragraph::new(lines).render(area, buf);
}

fn key_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn desc_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn short_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in SHORT_HELP.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SHORT_SEPARATOR, desc_style()));
        }
        spans.push(Span::styled(*key, key_style()));
        spans.push(Span::styled(format!(" {desc}"), desc_style()));
    }
    Line::from(spans)
}

fn full_lines() -> Vec<Line<'static>> {
    let widths: Vec<usize> = FULL_HELP
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|(key, desc)| key.chars().count() + 1 + desc.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    (0..usize::from(help_height(true)))
        .map(|row| {
            let mut spans = Vec::new();
            for (col, group) in FULL_HELP.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(COLUMN_SEPARATOR));
                }
                match group.get(row) {
                    Some((key, desc)) => {
                        let used = key.chars().count() + 1 + desc.chars().count();
                        spans.push(Span::styled(*key, key_style()));
                        spans.push(Span::styled(format!(" {desc}"), desc_style()));
                        spans.push(Span::raw(" ".repeat(widths[col] - used)));
                    }
                    None => spans.push(Span::raw(" ".repeat(widths[col]))),
                }
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(full: bool, width: u16) -> String {
        let area = Rect::new(0, 0, width, help_height(full));
        let mut buf = Buffer::empty(area);
        render_help(full, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn short_help_is_one_line() {
        assert_eq!(help_height(false), 1);
        assert_eq!(render(false, 76), "? toggle help • q quit\n");
    }

    #[test]
    fn full_help_lists_every_binding() {
        assert_eq!(help_height(true), 3);
        let content = render(true, 100);
        for text in ["↑/k up", "→/l right", "n new", "e edit", "d delete", "enter move", "q quit"] {
            assert!(content.contains(text), "missing {text:?} in\n{content}");
        }
    }

    #[test]
    fn full_help_groups_are_columns() {
        let content = render(true, 100);
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("↑/k up"));
        assert!(lines[1].starts_with("↓/j down"));
        assert!(lines[2].contains("d delete"));
    }

    #[test]
    fn help_is_clipped_to_width() {
        let content = render(false, 6);
        assert_eq!(content, "? togg\n");
    }
}
