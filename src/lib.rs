#![warn(missing_docs)]

//! # cellgrid
//!
//! An interactive terminal grid editor. A fixed-size table of text cells is
//! shown through a window that scrolls with the cursor; cells are edited in
//! place and the whole table is saved as CSV on request.
//!
//! ## Layers
//!
//! - [`grid`]: the table, cursor and viewport with their invariants. No
//!   terminal I/O.
//! - [`codec`]: CSV encoding, decoding and the save/load file operations.
//! - [`command`] and [`key`]: key bindings and the logical commands they map to.
//! - [`editor`]: the single-line cell editor.
//! - [`render`]: draws the grid, status line and help line.
//! - [`app`]: the bubbletea model tying it together.
//!
//! ## Driving the grid directly
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! let mut grid = GridModel::new(20, 3, TerminalSize::new(80, 19), Layout::default())?;
//! for _ in 0..6 {
//!     grid.move_cursor(Direction::Down);
//! }
//! grid.commit_edit("x");
//! assert_eq!(grid.viewport().start_row(), 2);
//!
//! let csv = String::from_utf8(cellgrid::codec::encode(grid.table())).unwrap();
//! assert_eq!(csv.lines().nth(6), Some("x,,"));
//! # Ok::<(), cellgrid::GridError>(())
//! ```

pub mod app;
pub mod codec;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod key;
pub mod render;

use bubbletea_rs::Cmd;

/// Focus management for input components.
///
/// Components that take keyboard input only while focused implement this so
/// the owner can move focus between them.
///
/// ```rust
/// use cellgrid::{editor, Component};
///
/// let mut input = editor::new();
/// assert!(!input.focused());
/// input.focus();
/// assert!(input.focused());
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    ///
    /// May return a command for focus side effects such as a redraw.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use app::{set_launch_options, App, LaunchOptions};
pub use command::{Command, GridKeyMap};
pub use config::{Config, Layout};
pub use error::{GridError, Result};
pub use grid::Model as GridModel;

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::app::{App, LaunchOptions};
    pub use crate::command::{Command, GridKeyMap};
    pub use crate::config::{Config, Layout, MAX_COLS, MAX_ROWS};
    pub use crate::editor::Model as CellEditor;
    pub use crate::error::{GridError, Result};
    pub use crate::grid::{
        CellPosition, CellView, Direction, EditOutcome, Model as GridModel, TerminalSize,
        CELL_CAPACITY,
    };
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::render::Status;
    pub use crate::Component;
}
