//! Query buffer with a caret and word-aware editing.
//!
//! The caret counts chars, not bytes. Mutating operations return `true` when
//! the buffer text changed, which is the signal to re-run the filter; caret
//! moves return nothing because they never affect results.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextCursor {
    buffer: String,
    caret: usize,
}

impl TextCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(b, _)| b)
    }

    fn chars(&self) -> Vec<char> {
        self.buffer.chars().collect()
    }

    /// Remove chars `[start, end)` and put the caret at `start`.
    fn remove_range(&mut self, start: usize, end: usize) -> bool {
        let end = end.min(self.len());
        if start >= end {
            return false;
        }
        let (from, to) = (self.byte_at(start), self.byte_at(end));
        self.buffer.replace_range(from..to, "");
        self.caret = start;
        true
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let at = self.byte_at(self.caret);
        self.buffer.insert(at, c);
        self.caret += 1;
        true
    }

    /// Paste: surrounding whitespace is trimmed first.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let at = self.byte_at(self.caret);
        self.buffer.insert_str(at, text);
        self.caret += text.chars().count();
        true
    }

    /// Backspace.
    pub fn delete_back(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.remove_range(self.caret - 1, self.caret)
    }

    pub fn delete_forward(&mut self) -> bool {
        self.remove_range(self.caret, self.caret + 1)
    }

    pub fn delete_to_end(&mut self) -> bool {
        let len = self.len();
        self.remove_range(self.caret, len)
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.buffer.is_empty();
        self.buffer.clear();
        self.caret = 0;
        changed
    }

    /// Delete the token left of the caret. The char right before the caret
    /// always goes, even if it is whitespace.
    pub fn delete_word_back(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let chars = self.chars();
        let mut start = self.caret - 1;
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.remove_range(start, self.caret)
    }

    /// Delete leading whitespace plus the next word. Caret stays put.
    pub fn delete_word_forward(&mut self) -> bool {
        let end = skip_word_right(&self.chars(), self.caret);
        self.remove_range(self.caret, end)
    }

    pub fn move_start(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_word_left(&mut self) {
        self.caret = skip_word_left(&self.chars(), self.caret);
    }

    pub fn move_word_right(&mut self) {
        self.caret = skip_word_right(&self.chars(), self.caret);
    }
}

fn skip_word_left(chars: &[char], from: usize) -> usize {
    let mut pos = from.min(chars.len());
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    pos
}

fn skip_word_right(chars: &[char], from: usize) -> usize {
    let mut pos = from.min(chars.len());
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < chars.len() && !chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}
