//! Centralized layout measurements for the TUI.
//!
//! Column sizes derive from the terminal size, so every widget reads the
//! same divisors from here.

/// Divisor and inset applied to the terminal size.
///
/// A column's list is `width / MARGIN` wide; the help line is
/// `width - MARGIN` wide.
pub const MARGIN: u16 = 4;

/// A column's list is `height / HEIGHT_DIVISOR` rows tall.
pub const HEIGHT_DIVISOR: u16 = 2;

/// Horizontal cells a column adds around its list (border and padding).
pub const COLUMN_FRAME_WIDTH: u16 = 2 + 2 * COLUMN_PADDING_X;

/// Vertical cells a column adds around its list (border and padding).
pub const COLUMN_FRAME_HEIGHT: u16 = 2 + 2 * COLUMN_PADDING_Y;

/// Horizontal padding inside a column border.
pub const COLUMN_PADDING_X: u16 = 2;

/// Vertical padding inside a column border.
pub const COLUMN_PADDING_Y: u16 = 1;

/// Rows occupied by a single task in a column list.
pub const TASK_ITEM_HEIGHT: u16 = 2;
