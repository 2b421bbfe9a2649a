//! Single-column layout: prompt, result list, status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::state::ListArea;

use super::theme::{MARGIN_X, MIN_LIST_LINES, PROMPT_HEIGHT, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub prompt: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl LayoutRegions {
    /// The list rect in the form the session uses for hit testing.
    pub fn list_area(&self) -> ListArea {
        ListArea {
            x: self.list.x,
            y: self.list.y,
            width: self.list.width,
            height: self.list.height,
        }
    }
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROMPT_HEIGHT),
            Constraint::Min(MIN_LIST_LINES),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    LayoutRegions {
        prompt: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

/// Text area inside a region, after the horizontal margin.
pub fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + MARGIN_X,
        y: area.y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: area.height,
    }
}
