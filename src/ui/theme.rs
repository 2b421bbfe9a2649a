//! Theme: dark teal canvas, sand text.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// List canvas.
    pub const BG: Color = Color::Rgb(6, 35, 41);
    /// Prompt bar.
    pub const PROMPT_BG: Color = Color::Rgb(30, 30, 30);
    /// Selected or hovered row.
    pub const HIGHLIGHT: Color = Color::Rgb(30, 50, 57);
    pub const SCROLLBAR: Color = Color::Rgb(50, 70, 80);
    /// Row text and the placeholder.
    pub const TEXT: Color = Color::Rgb(209, 184, 151);
    /// Typed query.
    pub const QUERY: Color = Color::Rgb(245, 245, 245);
    pub const ACCENT: Color = Color::Rgb(100, 150, 170);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
}

pub const PROMPT_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_LIST_LINES: u16 = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const PLACEHOLDER: &str = "search: ";
pub const NO_MATCHES: &str = "[no matches]";
