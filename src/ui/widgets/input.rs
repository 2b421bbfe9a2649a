//! Prompt bar: placeholder or query, with the terminal cursor on the caret.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::layout::inset;
use crate::ui::theme::{colors, PLACEHOLDER};

/// First char drawn so the caret cell stays inside `width` columns.
fn scroll_start(caret: usize, width: u16) -> usize {
    caret.saturating_sub(usize::from(width.saturating_sub(1)))
}

pub fn render(f: &mut Frame, buffer: &str, caret: usize, area: Rect) {
    let block = Block::default().style(Style::default().bg(colors::PROMPT_BG));
    f.render_widget(block, area);
    let inner = inset(area);

    let start = scroll_start(caret, inner.width);
    let span = if buffer.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(colors::TEXT))
    } else {
        let shown: String = buffer
            .chars()
            .skip(start)
            .take(usize::from(inner.width))
            .collect();
        Span::styled(shown, Style::default().fg(colors::QUERY))
    };
    f.render_widget(Paragraph::new(span), inner);

    // `caret - start` is below `inner.width`, so it fits in u16.
    let column = u16::try_from(caret - start).unwrap_or(u16::MAX);
    f.set_cursor_position(Position { x: inner.x.saturating_add(column), y: inner.y });
}
