//! Key bindings for the cell editor.

use crate::key::{Binding, KeyMap as KeyMapTrait, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

fn ctrl(c: char) -> KeyPress {
    KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn alt(code: KeyCode) -> KeyPress {
    KeyPress::from((code, KeyModifiers::ALT))
}

/// Bindings active while a cell is being edited.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Store the text in the cell and close the editor.
    pub commit: Binding,
    /// Close the editor and keep the old cell text.
    pub cancel: Binding,
    /// Move one character right.
    pub character_forward: Binding,
    /// Move one character left.
    pub character_backward: Binding,
    /// Move one word right.
    pub word_forward: Binding,
    /// Move one word left.
    pub word_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete from the start of the text to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete from the cursor to the end of the text.
    pub delete_after_cursor: Binding,
    /// Jump to the start of the text.
    pub line_start: Binding,
    /// Jump to the end of the text.
    pub line_end: Binding,
    /// Insert clipboard contents.
    pub paste: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit"),
            cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            character_forward: Binding::new(vec![KeyPress::from(KeyCode::Right), ctrl('f')]),
            character_backward: Binding::new(vec![KeyPress::from(KeyCode::Left), ctrl('b')]),
            word_forward: Binding::new(vec![
                alt(KeyCode::Right),
                KeyPress::from((KeyCode::Right, KeyModifiers::CONTROL)),
                alt(KeyCode::Char('f')),
            ]),
            word_backward: Binding::new(vec![
                alt(KeyCode::Left),
                KeyPress::from((KeyCode::Left, KeyModifiers::CONTROL)),
                alt(KeyCode::Char('b')),
            ]),
            delete_character_backward: Binding::new(vec![
                KeyPress::from(KeyCode::Backspace),
                ctrl('h'),
            ]),
            delete_character_forward: Binding::new(vec![
                KeyPress::from(KeyCode::Delete),
                ctrl('d'),
            ]),
            delete_before_cursor: Binding::new(vec![ctrl('u')]),
            delete_after_cursor: Binding::new(vec![ctrl('k')]),
            line_start: Binding::new(vec![KeyPress::from(KeyCode::Home), ctrl('a')])
                .with_help("home", "start"),
            line_end: Binding::new(vec![KeyPress::from(KeyCode::End), ctrl('e')])
                .with_help("end", "end"),
            paste: Binding::new(vec![ctrl('v')]).with_help("ctrl+v", "paste"),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.commit, &self.cancel, &self.paste]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.commit, &self.cancel],
            vec![&self.line_start, &self.line_end, &self.paste],
        ]
    }
}
