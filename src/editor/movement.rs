//! Cursor movement and deletion for the cell editor.

use super::Model;

impl Model {
    /// Deletes everything before the cursor.
    pub(super) fn delete_before_cursor(&mut self) {
        self.value.drain(..self.pos);
        self.offset = 0;
        self.set_cursor(0);
    }

    /// Deletes everything after the cursor.
    pub(super) fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.set_cursor(self.value.len());
    }

    pub(super) fn delete_character_backward(&mut self) {
        if self.pos > 0 {
            self.value.remove(self.pos - 1);
            self.pos -= 1;
        }
    }

    pub(super) fn delete_character_forward(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    /// Moves to the start of the previous word.
    pub(super) fn word_backward(&mut self) {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        self.set_cursor(i);
    }

    /// Moves past the end of the next word.
    pub(super) fn word_forward(&mut self) {
        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        self.set_cursor(i);
    }
}
