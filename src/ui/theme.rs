//! Color theme constants.

use ratatui::style::Color;

/// Border of the unfocused pane.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border and cursor row of the focused pane.
pub const COLOR_ACCENT: Color = Color::White;

/// Cursor row of the unfocused pane.
pub const COLOR_DIM: Color = Color::Gray;

/// Section labels in the details pane (attribute keys, note dates).
pub const COLOR_LABEL: Color = Color::Cyan;

/// Gifts already given.
pub const COLOR_GIFTED: Color = Color::DarkGray;

/// Error text in the status line.
pub const COLOR_ERROR: Color = Color::Red;

/// Warning text in the status line.
pub const COLOR_WARNING: Color = Color::Yellow;
