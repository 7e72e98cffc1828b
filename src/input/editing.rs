//! Word-wise editing, line deletion and horizontal scrolling.

use super::model::Model;
use unicode_width::UnicodeWidthChar;

fn cell_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl Model {
    /// Delete all text before the cursor.
    pub(super) fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.offset = 0;
        self.set_cursor(0);
    }

    /// Delete all text after the cursor.
    pub(super) fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.set_cursor(self.value.len());
    }

    /// Delete the word left of the cursor, along with any whitespace between
    /// it and the cursor.
    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let end = self.pos;
        let start = self.word_start_before(end);
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    /// Delete the word right of the cursor, along with any whitespace between
    /// the cursor and it.
    pub(super) fn delete_word_forward(&mut self) {
        if self.pos >= self.value.len() {
            return;
        }
        let start = self.pos;
        let end = self.word_end_after(start);
        self.value.drain(start..end);
        self.set_cursor(start);
    }

    /// Move the cursor to the start of the previous word.
    pub(super) fn word_backward(&mut self) {
        let start = self.word_start_before(self.pos);
        self.set_cursor(start);
    }

    /// Move the cursor past the end of the next word.
    pub(super) fn word_forward(&mut self) {
        let end = self.word_end_after(self.pos);
        self.set_cursor(end);
    }

    fn word_start_before(&self, mut i: usize) -> usize {
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    fn word_end_after(&self, mut i: usize) -> usize {
        let n = self.value.len();
        while i < n && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < n && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    /// Keeps the cursor inside the visible window `offset..offset_right`.
    pub(super) fn handle_overflow(&mut self) {
        let total: usize = self.value.iter().map(|&c| cell_width(c)).sum();
        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        // Correct right offset if we've deleted characters
        self.offset_right = self.offset_right.min(self.value.len());
        self.offset = self.offset.min(self.offset_right);

        if self.pos < self.offset {
            // Scrolled left past the window: anchor on the cursor and extend right.
            self.offset = self.pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < self.value.len() && w + cell_width(self.value[i]) <= self.width {
                w += cell_width(self.value[i]);
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            // Scrolled right past the window: anchor on the cursor and extend left,
            // keeping one cell for the cursor itself.
            self.offset_right = self.pos;
            let budget = self.width.saturating_sub(1);
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + cell_width(self.value[i - 1]) <= budget {
                w += cell_width(self.value[i - 1]);
                i -= 1;
            }
            self.offset = i;
        }
    }
}
