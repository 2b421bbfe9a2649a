//! Selected row and scroll offset over a list of fixed-height rows.

/// `scroll_offset` and heights share one unit (terminal rows in the TUI).
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    selected: usize,
    scroll_offset: f32,
    item_height: f32,
    viewport_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Viewport {
    pub fn new(item_height: f32, viewport_height: f32) -> Self {
        Self {
            selected: 0,
            scroll_offset: 0.0,
            item_height: item_height.max(f32::EPSILON),
            viewport_height: viewport_height.max(0.0),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn content_height(&self, count: usize) -> f32 {
        count as f32 * self.item_height
    }

    pub fn max_scroll(&self, count: usize) -> f32 {
        (self.content_height(count) - self.viewport_height).max(0.0)
    }

    pub fn visible_first(&self) -> usize {
        (self.scroll_offset / self.item_height).floor() as usize
    }

    /// Last fully visible row. Saturates at 0 when the viewport is shorter
    /// than one row.
    pub fn visible_last(&self) -> usize {
        let last = (self.scroll_offset + self.viewport_height - self.item_height) / self.item_height;
        last.floor().max(0.0) as usize
    }

    pub fn is_visible(&self, row: usize) -> bool {
        row >= self.visible_first() && row <= self.visible_last()
    }

    /// Back to the top; used after every filter change.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0.0;
    }

    /// New viewport height (terminal resize), re-clamped against `count`.
    pub fn set_viewport_height(&mut self, viewport_height: f32, count: usize) {
        self.viewport_height = viewport_height.max(0.0);
        self.clamp(count);
    }

    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll(count));
    }

    pub fn move_up(&mut self, count: usize) {
        if !self.is_visible(self.selected) {
            self.selected = self.visible_first();
        } else {
            self.selected = self.selected.saturating_sub(1);
            if self.selected < self.visible_first() {
                self.scroll_offset -= self.item_height;
            }
        }
        self.clamp(count);
    }

    pub fn move_down(&mut self, count: usize) {
        if !self.is_visible(self.selected) {
            self.selected = self.visible_first();
        } else {
            self.selected = (self.selected + 1).min(count.saturating_sub(1));
            if self.selected > self.visible_last() {
                self.scroll_offset += self.item_height;
            }
        }
        self.clamp(count);
    }

    /// Mouse wheel: positive `delta` scrolls towards the end.
    pub fn scroll_by(&mut self, delta: f32, count: usize) {
        self.scroll_to(self.scroll_offset + delta, count);
    }

    /// Scrollbar drag or any absolute scroll.
    pub fn scroll_to(&mut self, offset: f32, count: usize) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll(count));
    }

    /// Scroll so the thumb follows a pointer at `fraction` (0..=1) of the track.
    pub fn scroll_to_fraction(&mut self, fraction: f32, count: usize) {
        let max = self.max_scroll(count);
        self.scroll_to(fraction.clamp(0.0, 1.0) * max, count);
    }

    /// Row under a point `y` measured from the top of the list area.
    pub fn row_at(&self, y: f32, count: usize) -> Option<usize> {
        if y < 0.0 || y >= self.viewport_height {
            return None;
        }
        let row = ((self.scroll_offset + y) / self.item_height).floor() as usize;
        (row < count).then_some(row)
    }
}
