//! Session state read by the renderer: query, results, selection.

use crate::cursor::TextCursor;
use crate::search::ResultList;
use crate::viewport::Viewport;

/// Screen rectangle of the result list, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ListArea {
    /// Rightmost column; the scrollbar lives there.
    pub fn scrollbar_x(&self) -> u16 {
        self.x + self.width.saturating_sub(1)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x + self.width
            && row >= self.y
            && row < self.y + self.height
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub cursor: TextCursor,
    pub results: ResultList,
    pub viewport: Viewport,
    /// Row under the mouse pointer.
    pub hovered: Option<usize>,
    /// Last pointer cell seen, to re-resolve `hovered` after a scroll.
    pub pointer: Option<(u16, u16)>,
    pub list_area: ListArea,
    /// A scrollbar drag is in progress.
    pub dragging_scrollbar: bool,
}

impl AppState {
    pub fn query(&self) -> &str {
        self.cursor.text()
    }

    pub fn caret(&self) -> usize {
        self.cursor.caret()
    }

    pub fn no_matches(&self) -> bool {
        self.results.no_matches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_area_hit_testing() {
        let area = ListArea { x: 2, y: 3, width: 10, height: 4 };
        assert!(area.contains(2, 3));
        assert!(area.contains(11, 6));
        assert!(!area.contains(12, 3));
        assert!(!area.contains(2, 7));
        assert_eq!(area.scrollbar_x(), 11);
    }
}
