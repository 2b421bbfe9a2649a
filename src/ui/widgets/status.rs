//! Status bar: match count on the left, key hints on the right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::theme::colors;

const HINTS: &str = " ↑↓ select  Enter launch  Ctrl+V paste  Esc quit ";

pub fn render(f: &mut Frame, app: &App, area: ratatui::prelude::Rect) {
    let total = app.catalog().len();
    let left = if app.state.no_matches() {
        format!(" 0/{total}")
    } else {
        format!(" {}/{total}", app.count())
    };
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + HINTS.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), HINTS);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::PROMPT_BG));
    f.render_widget(Paragraph::new(span), area);
}
