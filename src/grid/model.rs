//! The grid controller: table, cursor and viewport kept consistent.

use super::cell::Cell;
use super::position::CellPosition;
use super::table::Table;
use super::viewport::{TerminalSize, Viewport};
use super::window::VisibleWindow;
use crate::config::Layout;
use crate::error::Result;

/// A single-cell cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

/// What [`Model::commit_edit`] stored.
///
/// Truncation is not an error: text beyond the cell capacity is dropped and
/// reported here so the caller can tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Where the text was stored.
    pub position: CellPosition,
    /// Characters kept.
    pub stored: usize,
    /// Characters cut off past capacity.
    pub truncated: usize,
}

impl EditOutcome {
    /// Whether any input was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated > 0
    }
}

/// Grid state for one editing session.
///
/// Owns the [`Table`], the cursor and the [`Viewport`]. Every mutation keeps
/// two invariants:
///
/// - the cursor lies inside `[0, row_count) × [0, col_count)`;
/// - the cursor lies inside the viewport on every axis with a non-zero
///   visible extent, and the viewport never runs past the table.
///
/// # Examples
///
/// ```rust
/// use cellgrid::config::Layout;
/// use cellgrid::grid::{Direction, Model, TerminalSize};
///
/// // 5 visible rows: 4 lines of chrome + 5 × 3 lines
/// let mut grid = Model::new(20, 3, TerminalSize::new(80, 19), Layout::default()).unwrap();
/// for _ in 0..6 {
///     grid.move_cursor(Direction::Down);
/// }
/// assert_eq!(grid.cursor().row, 6);
/// assert_eq!(grid.viewport().start_row(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    table: Table,
    cursor: CellPosition,
    viewport: Viewport,
    layout: Layout,
    terminal: TerminalSize,
}

impl Default for Model {
    /// A 1×1 grid on an 80×24 terminal.
    fn default() -> Self {
        let layout = Layout::default();
        let terminal = TerminalSize::default();
        Self {
            table: Table::default(),
            cursor: CellPosition::default(),
            viewport: Viewport::new(terminal, &layout),
            layout,
            terminal,
        }
    }
}

impl Model {
    /// Creates an empty grid with the cursor and viewport at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// [`GridError::Configuration`](crate::GridError::Configuration) when `rows`
    /// or `cols` is outside `[1, MAX_ROWS]` / `[1, MAX_COLS]`.
    pub fn new(rows: usize, cols: usize, terminal: TerminalSize, layout: Layout) -> Result<Self> {
        let table = Table::new(rows, cols)?;
        let viewport = Viewport::new(terminal, &layout);
        tracing::debug!(
            rows,
            cols,
            visible_rows = viewport.visible_rows(),
            visible_cols = viewport.visible_cols(),
            "grid initialized"
        );
        Ok(Self {
            table,
            cursor: CellPosition::default(),
            viewport,
            layout,
            terminal,
        })
    }

    /// The underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Declared row count.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Declared column count.
    pub fn col_count(&self) -> usize {
        self.table.col_count()
    }

    /// The selected cell's coordinate.
    pub fn cursor(&self) -> CellPosition {
        self.cursor
    }

    /// The current window.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Screen geometry used for the viewport.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Terminal size last passed to [`Model::recompute_viewport_size`].
    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal
    }

    /// The cell under the cursor.
    pub fn selected_cell(&self) -> &Cell {
        &self.table[self.cursor]
    }

    /// Recomputes the visible extent for `terminal` and re-clamps the origin.
    ///
    /// Runs before every render. The clamp is applied even when the size is
    /// unchanged, and the origin is then snapped so a shrunken window still
    /// contains the cursor.
    pub fn recompute_viewport_size(&mut self, terminal: TerminalSize) {
        if terminal != self.terminal {
            tracing::debug!(width = terminal.width, height = terminal.height, "terminal resized");
        }
        self.terminal = terminal;
        self.viewport.resize(terminal, &self.layout);
        self.viewport.clamp(self.row_count(), self.col_count());
        self.viewport.snap_row(self.cursor);
        self.viewport.snap_col(self.cursor);
    }

    /// Moves the cursor one cell, scrolling just enough to keep it visible.
    ///
    /// Moving past an edge leaves the cursor where it is.
    pub fn move_cursor(&mut self, direction: Direction) -> CellPosition {
        let last_row = self.row_count() - 1;
        let last_col = self.col_count() - 1;
        let cur = &mut self.cursor;

        match direction {
            Direction::Up => cur.row = cur.row.saturating_sub(1),
            Direction::Down => cur.row = (cur.row + 1).min(last_row),
            Direction::Left => cur.col = cur.col.saturating_sub(1),
            Direction::Right => cur.col = (cur.col + 1).min(last_col),
        }

        match direction {
            Direction::Up | Direction::Down => self.viewport.snap_row(self.cursor),
            Direction::Left | Direction::Right => self.viewport.snap_col(self.cursor),
        }

        tracing::trace!(?direction, cursor = %self.cursor, "cursor moved");
        self.cursor
    }

    /// Text of the selected cell, to seed an editing surface.
    pub fn begin_edit(&self) -> &str {
        self.selected_cell().text()
    }

    /// Stores `text` in the selected cell, truncated to capacity.
    ///
    /// The text is kept verbatim otherwise: no trimming, no validation.
    pub fn commit_edit(&mut self, text: &str) -> EditOutcome {
        let position = self.cursor;
        let truncated = self
            .table
            .store(position.row, position.col, text)
            .unwrap_or_default();
        let outcome = EditOutcome {
            position,
            stored: self.selected_cell().char_count(),
            truncated,
        };
        if outcome.is_truncated() {
            tracing::info!(cell = %position, dropped = truncated, "edit truncated to cell capacity");
        }
        outcome
    }

    /// Fills the table from decoded records, starting at `A1`.
    ///
    /// Records and fields beyond the declared extent are ignored; cells without
    /// a matching field keep their content. Returns how many fields were
    /// truncated to capacity.
    pub fn import(&mut self, records: &[Vec<String>]) -> usize {
        let mut truncated = 0;
        for (row, record) in records.iter().enumerate().take(self.row_count()) {
            for (col, field) in record.iter().enumerate().take(self.col_count()) {
                if self.table.store(row, col, field).unwrap_or(0) > 0 {
                    truncated += 1;
                }
            }
        }
        truncated
    }

    /// Row-major iterator over the visible cells.
    pub fn visible_window(&self) -> VisibleWindow<'_> {
        VisibleWindow::new(
            &self.table,
            self.cursor,
            self.viewport.row_range(self.row_count()),
            self.viewport.col_range(self.col_count()),
        )
    }
}
