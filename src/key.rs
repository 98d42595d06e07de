//! Key bindings with help text.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the short label shown in the help line. Types that own several bindings
//! implement [`KeyMap`] so the help line can be generated from them.
//!
//! ```rust
//! use cellgrid::key::{Binding, KeyPress};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let save = Binding::new(vec![
//!     KeyPress::from(KeyCode::F(2)),
//!     KeyPress::from((KeyCode::Char('s'), KeyModifiers::CONTROL)),
//! ])
//! .with_help("f2", "save");
//!
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::CONTROL };
//! assert!(save.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// One key, optionally with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Whether `msg` is this key press.
    ///
    /// Shift is ignored for character keys since terminals already report it
    /// through the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                msg.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => msg.modifiers == self.modifiers,
        }
    }
}

/// Label pair shown in the help line, e.g. `("f2", "save")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding without help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help labels.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help labels.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently reacts to input.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Implemented by anything that owns bindings worth listing in help.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped by column.
    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![self.short_help()]
    }
}

/// Renders `key: desc` pairs joined by `separator`, skipping disabled bindings
/// and bindings without help.
pub fn short_help_view(map: &impl KeyMap, separator: &str) -> String {
    map.short_help()
        .into_iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{}: {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(separator)
}
