//! Rendering helpers shared by the widget and app tests.

use ratatui::buffer::Buffer;

/// Flattens a buffer into text, one line per row with trailing blanks
/// removed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width)
                .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
                .map(|cell| cell.symbol())
                .collect();
            format!("{}\n", row.trim_end_matches(' '))
        })
        .collect()
}
