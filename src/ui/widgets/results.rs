//! Result list: visible rows only, highlight bar, scrollbar on overflow.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;
use crate::ui::layout::inset;
use crate::ui::theme::{colors, NO_MATCHES};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);
    let inner = inset(area);

    if app.state.no_matches() {
        let line = Line::from(Span::styled(NO_MATCHES, Style::default().fg(colors::TEXT)));
        f.render_widget(Paragraph::new(line), inner);
        return;
    }

    let viewport = &app.state.viewport;
    let count = app.count();
    if count == 0 {
        return;
    }
    let first = viewport.visible_first();
    let last = viewport.visible_last().min(count - 1);

    let lines: Vec<Line> = (first..=last)
        .filter_map(|row| app.item(row).map(|item| (row, item)))
        .map(|(row, item)| {
            let selected = row == viewport.selected();
            let hovered = app.state.hovered == Some(row);
            let style = if selected || hovered {
                Style::default().fg(colors::TEXT).bg(colors::HIGHLIGHT)
            } else {
                Style::default().fg(colors::TEXT)
            };
            let style = if selected { style.add_modifier(Modifier::BOLD) } else { style };
            let marker = if selected { "▎ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, style.fg(colors::ACCENT)),
                Span::styled(item.name.as_str(), style),
            ])
            .style(style)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);

    let max_scroll = viewport.max_scroll(count);
    if max_scroll > 0.0 {
        let mut state = ScrollbarState::new(count)
            .position(viewport.scroll_offset().round() as usize)
            .viewport_content_length(area.height as usize);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(None)
            .thumb_style(Style::default().fg(colors::SCROLLBAR));
        f.render_stateful_widget(scrollbar, area, &mut state);
    }
}
