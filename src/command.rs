//! Logical commands and the keys that produce them.

use crate::grid::Direction;
use crate::key::{Binding, KeyMap, KeyPress};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// What the grid does in response to one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cursor one row up.
    MoveUp,
    /// Cursor one row down.
    MoveDown,
    /// Cursor one column left.
    MoveLeft,
    /// Cursor one column right.
    MoveRight,
    /// Open the cell editor on the selected cell.
    BeginEdit,
    /// Write the table to the configured file.
    Save,
    /// Leave the program.
    Quit,
}

impl Command {
    /// The cursor step for movement commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::BeginEdit | Command::Save | Command::Quit => None,
        }
    }
}

/// Key bindings for grid navigation.
///
/// | Command | Keys |
/// |---------|------|
/// | `MoveUp` | `↑`, `k` |
/// | `MoveDown` | `↓`, `j` |
/// | `MoveLeft` | `←`, `h` |
/// | `MoveRight` | `→`, `l` |
/// | `BeginEdit` | `Enter` |
/// | `Save` | `F2`, `ctrl+s` |
/// | `Quit` | `Esc`, `q`, `F10`, `ctrl+c` |
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Cursor up.
    pub up: Binding,
    /// Cursor down.
    pub down: Binding,
    /// Cursor left.
    pub left: Binding,
    /// Cursor right.
    pub right: Binding,
    /// Open the editor.
    pub edit: Binding,
    /// Save to CSV.
    pub save: Binding,
    /// Quit.
    pub quit: Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down"),
            left: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]).with_help("←/h", "left"),
            right: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "right"),
            edit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "edit"),
            save: Binding::new(vec![
                KeyPress::from(KeyCode::F(2)),
                KeyPress::from((KeyCode::Char('s'), KeyModifiers::CONTROL)),
            ])
            .with_help("f2", "save"),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Esc),
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from(KeyCode::F(10)),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("esc/q", "exit"),
        }
    }
}

impl GridKeyMap {
    /// Decodes a key press into a command, if it is bound.
    pub fn command_for(&self, msg: &KeyMsg) -> Option<Command> {
        let table = [
            (&self.up, Command::MoveUp),
            (&self.down, Command::MoveDown),
            (&self.left, Command::MoveLeft),
            (&self.right, Command::MoveRight),
            (&self.edit, Command::BeginEdit),
            (&self.save, Command::Save),
            (&self.quit, Command::Quit),
        ];
        table
            .into_iter()
            .find(|(binding, _)| binding.matches(msg))
            .map(|(_, command)| command)
    }
}

impl KeyMap for GridKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.up,
            &self.down,
            &self.left,
            &self.right,
            &self.edit,
            &self.save,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.left, &self.right],
            vec![&self.edit, &self.save, &self.quit],
        ]
    }
}
