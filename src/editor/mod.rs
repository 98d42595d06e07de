//! Single-line editor used to change the text of one cell.
//!
//! The editor holds its own copy of the text while the user types. Nothing
//! reaches the table until the application reads [`Model::value`] back on
//! commit, so cancelling leaves the cell untouched.
//!
//! The text scrolls horizontally when it is wider than the cell, keeping the
//! cursor in view.
//!
//! ```rust
//! use cellgrid::editor;
//! use cellgrid::Component;
//!
//! let mut input = editor::new();
//! input.set_width(8);
//! input.set_value("hello");
//! input.focus();
//! assert_eq!(input.value(), "hello");
//! assert_eq!(input.position(), 5);
//! ```

mod keymap;
mod movement;

pub use keymap::KeyMap;

use crate::grid::CELL_CAPACITY;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Clipboard text delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard failure delivered by [`paste`].
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Editor state.
pub struct Model {
    /// Key bindings.
    pub key_map: KeyMap,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Style of the remaining text.
    pub text_style: Style,
    /// Last clipboard error, cleared by the next edit.
    pub err: Option<String>,

    value: Vec<char>,
    pos: usize,
    offset: usize,
    width: usize,
    char_limit: usize,
    focus: bool,
}

/// Creates an unfocused, empty editor limited to one cell's capacity.
pub fn new() -> Model {
    Model {
        key_map: KeyMap::default(),
        cursor_style: Style::new().reverse(true),
        text_style: Style::new(),
        err: None,
        value: Vec::new(),
        pos: 0,
        offset: 0,
        width: 0,
        char_limit: CELL_CAPACITY,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the text and moves the cursor to its end.
    ///
    /// Text past the character limit is dropped.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().take(self.char_limit).collect();
        self.err = None;
        self.set_cursor(self.value.len());
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Cursor to the start of the text.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Cursor to the end of the text.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Display columns available to the text, including the cursor.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Display columns available to the text.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum number of characters.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.value.clear();
        self.err = None;
        self.offset = 0;
        self.set_cursor(0);
    }

    /// Handles key presses and clipboard messages.
    ///
    /// Commit and cancel are left to the caller; the editor ignores them.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let text = sanitize_paste(&paste_msg.0);
            self.insert(text.chars());
            return None;
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::warn!(error = %paste_err.0, "clipboard paste failed");
            self.err = Some(paste_err.0.clone());
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let keys = &self.key_map;
        if keys.commit.matches(key_msg) || keys.cancel.matches(key_msg) {
            return None;
        }
        if keys.paste.matches(key_msg) {
            return Some(paste());
        }

        if keys.delete_before_cursor.matches(key_msg) {
            self.delete_before_cursor();
        } else if keys.delete_after_cursor.matches(key_msg) {
            self.delete_after_cursor();
        } else if keys.delete_character_backward.matches(key_msg) {
            self.delete_character_backward();
        } else if keys.delete_character_forward.matches(key_msg) {
            self.delete_character_forward();
        } else if keys.word_backward.matches(key_msg) {
            self.word_backward();
        } else if keys.word_forward.matches(key_msg) {
            self.word_forward();
        } else if keys.character_backward.matches(key_msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if keys.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if keys.line_start.matches(key_msg) {
            self.cursor_start();
        } else if keys.line_end.matches(key_msg) {
            self.cursor_end();
        } else if let KeyCode::Char(ch) = key_msg.key {
            let plain = key_msg.modifiers.difference(KeyModifiers::SHIFT).is_empty();
            if plain && !ch.is_control() {
                self.insert(std::iter::once(ch));
            }
            return None;
        } else {
            return None;
        }

        self.err = None;
        self.handle_overflow();
        None
    }

    /// Inserts at the cursor until the character limit is reached.
    fn insert(&mut self, chars: impl Iterator<Item = char>) {
        let room = self.char_limit.saturating_sub(self.value.len());
        let tail = self.value.split_off(self.pos);
        for ch in chars.take(room) {
            self.value.push(ch);
            self.pos += 1;
        }
        self.value.extend(tail);
        self.err = None;
        self.handle_overflow();
    }

    /// Keeps the cursor inside the visible slice `[offset, ..)`.
    fn handle_overflow(&mut self) {
        if self.width == 0 {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
        }
        // One column is kept for the cursor itself.
        while self.offset < self.pos && self.span_width(self.offset, self.pos) + 1 > self.width {
            self.offset += 1;
        }
    }

    fn span_width(&self, from: usize, to: usize) -> usize {
        self.value[from..to].iter().map(|c| char_width(*c)).sum()
    }

    /// Renders the visible slice padded to the editor width.
    ///
    /// The character under the cursor is drawn with `cursor_style` when the
    /// editor is focused.
    pub fn view(&self) -> String {
        let mut before = String::new();
        let mut under = ' ';
        let mut after = String::new();
        let mut used = 0;

        for (i, &ch) in self.value.iter().enumerate().skip(self.offset) {
            let w = char_width(ch);
            if self.width > 0 && used + w > self.width {
                break;
            }
            used += w;
            match i.cmp(&self.pos) {
                std::cmp::Ordering::Less => before.push(ch),
                std::cmp::Ordering::Equal => under = ch,
                std::cmp::Ordering::Greater => after.push(ch),
            }
        }
        if self.pos == self.value.len() {
            used += 1;
        }

        let mut v = self.text_style.render(&before);
        if self.focus {
            v.push_str(&self.cursor_style.render(&under.to_string()));
        } else {
            v.push_str(&self.text_style.render(&under.to_string()));
        }
        v.push_str(&self.text_style.render(&after));
        if self.width > used {
            v.push_str(&self.text_style.render(&" ".repeat(self.width - used)));
        }
        v
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Folds line breaks and tabs into spaces, since a cell holds a single line,
/// then strips escape sequences.
///
/// The folding comes first: the escape stripper drops tabs and would join
/// the words around them.
fn sanitize_paste(raw: &str) -> String {
    let folded: String = raw
        .replace("\r\n", " ")
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();
    strip_ansi_escapes::strip_str(folded)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Reads the system clipboard and delivers a [`PasteMsg`] or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to open clipboard: {e}"))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {e}"))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

#[cfg(test)]
mod tests;
