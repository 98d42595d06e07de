//! The visible window onto the table.
//!
//! A [`Viewport`] is an origin (`start_row`, `start_col`) plus a visible extent
//! (`visible_rows`, `visible_cols`) measured in cells. The extent comes from the
//! terminal size and the [`Layout`]; the origin follows the cursor using
//! snap-scrolling: it moves by the smallest amount that brings the cursor back
//! inside the window, never by a page and never to center it.
//!
//! ```rust
//! use cellgrid::config::Layout;
//! use cellgrid::grid::{CellPosition, TerminalSize, Viewport};
//!
//! // 19 lines = 4 lines of chrome + 5 rows of 3 lines each
//! let mut viewport = Viewport::new(TerminalSize::new(80, 19), &Layout::default());
//! assert_eq!(viewport.visible_rows(), 5);
//!
//! viewport.snap_row(CellPosition::new(6, 0));
//! assert_eq!(viewport.start_row(), 2);
//! ```

use super::position::CellPosition;
use crate::config::Layout;
use std::ops::Range;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Columns.
    pub width: u16,
    /// Lines.
    pub height: u16,
}

impl TerminalSize {
    /// Creates a size from columns and lines.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Origin and extent of the rendered sub-rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    start_row: usize,
    start_col: usize,
    visible_rows: usize,
    visible_cols: usize,
}

impl Viewport {
    /// Creates a viewport at origin `(0, 0)` sized for `size`.
    pub fn new(size: TerminalSize, layout: &Layout) -> Self {
        let mut viewport = Self::default();
        viewport.resize(size, layout);
        viewport
    }

    /// First visible row.
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    /// First visible column.
    pub fn start_col(&self) -> usize {
        self.start_col
    }

    /// Number of rows the screen can show.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Number of columns the screen can show.
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    /// Recomputes the visible extent from the terminal size.
    ///
    /// The origin is left alone; callers follow up with [`Viewport::clamp`].
    pub fn resize(&mut self, size: TerminalSize, layout: &Layout) {
        self.visible_rows = extent(size.height, layout.chrome_rows, layout.cell_height);
        self.visible_cols = extent(size.width, layout.chrome_cols, layout.column_stride());
    }

    /// Pulls the origin back so the window does not run past the table.
    ///
    /// When the table is smaller than the window the origin becomes 0.
    pub fn clamp(&mut self, row_count: usize, col_count: usize) {
        self.start_row = clamp_axis(self.start_row, self.visible_rows, row_count);
        self.start_col = clamp_axis(self.start_col, self.visible_cols, col_count);
    }

    /// Snaps the row origin so `cursor.row` is visible.
    pub fn snap_row(&mut self, cursor: CellPosition) {
        self.start_row = snap_axis(self.start_row, cursor.row, self.visible_rows);
    }

    /// Snaps the column origin so `cursor.col` is visible.
    pub fn snap_col(&mut self, cursor: CellPosition) {
        self.start_col = snap_axis(self.start_col, cursor.col, self.visible_cols);
    }

    /// Whether `pos` lies inside the window.
    pub fn contains(&self, pos: CellPosition) -> bool {
        (self.start_row..self.start_row + self.visible_rows).contains(&pos.row)
            && (self.start_col..self.start_col + self.visible_cols).contains(&pos.col)
    }

    /// Visible rows intersected with `[0, row_count)`.
    pub fn row_range(&self, row_count: usize) -> Range<usize> {
        bounded(self.start_row, self.visible_rows, row_count)
    }

    /// Visible columns intersected with `[0, col_count)`.
    pub fn col_range(&self, col_count: usize) -> Range<usize> {
        bounded(self.start_col, self.visible_cols, col_count)
    }
}

fn extent(available: u16, chrome: usize, per_cell: usize) -> usize {
    if per_cell == 0 {
        return 0;
    }
    (available as usize).saturating_sub(chrome) / per_cell
}

fn clamp_axis(origin: usize, extent: usize, count: usize) -> usize {
    if origin + extent > count {
        count.saturating_sub(extent)
    } else {
        origin
    }
}

// A zero extent still tracks the cursor as if one cell were visible, so the
// window reappears around it once the terminal grows again.
fn snap_axis(origin: usize, cursor: usize, extent: usize) -> usize {
    let extent = extent.max(1);
    if cursor < origin {
        cursor
    } else if cursor >= origin + extent {
        cursor + 1 - extent
    } else {
        origin
    }
}

fn bounded(origin: usize, extent: usize, count: usize) -> Range<usize> {
    let start = origin.min(count);
    start..(origin + extent).min(count)
}
