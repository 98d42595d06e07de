//! Viewport-scrolling grid controller.
//!
//! The grid maps a logical table, usually larger than the screen, onto a
//! bounded window and keeps a selection cursor consistent with scrolling.
//!
//! # Pieces
//!
//! - [`Cell`]: bounded text slot ([`CELL_CAPACITY`] characters)
//! - [`Table`]: contiguous `rows × cols` storage
//! - [`Viewport`]: origin plus visible extent, derived from [`TerminalSize`]
//! - [`Model`]: owns all of the above and exposes navigation and editing
//! - [`VisibleWindow`]: the read contract for renderers
//!
//! # Usage
//!
//! ```rust
//! use cellgrid::config::Layout;
//! use cellgrid::grid::{Direction, Model, TerminalSize};
//!
//! let mut grid = Model::new(3, 2, TerminalSize::new(80, 24), Layout::default()).unwrap();
//! grid.move_cursor(Direction::Right);
//! grid.commit_edit("hello");
//!
//! let selected: Vec<_> = grid
//!     .visible_window()
//!     .filter(|view| view.is_selected)
//!     .map(|view| view.cell.text().to_string())
//!     .collect();
//! assert_eq!(selected, vec!["hello"]);
//! ```

pub mod cell;
pub mod model;
pub mod position;
pub mod table;
pub mod viewport;
pub mod window;


pub use cell::{truncate_to_capacity, Cell, CELL_CAPACITY};
pub use model::{Direction, EditOutcome, Model};
pub use position::{column_label, CellPosition};
pub use table::Table;
pub use viewport::{TerminalSize, Viewport};
pub use window::{CellView, VisibleWindow};
