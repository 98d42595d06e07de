//! Iteration over the currently visible cells.

use super::cell::Cell;
use super::position::CellPosition;
use super::table::Table;
use std::ops::Range;

/// One visible cell as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView<'a> {
    /// Table row.
    pub row: usize,
    /// Table column.
    pub col: usize,
    /// The cell itself.
    pub cell: &'a Cell,
    /// Whether this is the cursor cell.
    pub is_selected: bool,
}

/// Row-major iterator over the visible rectangle.
///
/// Clone it before consuming, or call
/// [`Model::visible_window`](super::Model::visible_window) again, to walk the
/// window a second time.
#[derive(Debug, Clone)]
pub struct VisibleWindow<'a> {
    table: &'a Table,
    cursor: CellPosition,
    rows: Range<usize>,
    cols: Range<usize>,
    next: CellPosition,
}

impl<'a> VisibleWindow<'a> {
    pub(crate) fn new(
        table: &'a Table,
        cursor: CellPosition,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Self {
        let next = CellPosition::new(rows.start, cols.start);
        Self {
            table,
            cursor,
            rows,
            cols,
            next,
        }
    }

    /// Table rows covered by the window.
    pub fn row_range(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Table columns covered by the window.
    pub fn col_range(&self) -> Range<usize> {
        self.cols.clone()
    }

    fn remaining(&self) -> usize {
        if self.cols.is_empty() || self.next.row >= self.rows.end {
            return 0;
        }
        let full_rows = self.rows.end - self.next.row - 1;
        full_rows * self.cols.len() + (self.cols.end - self.next.col)
    }
}

impl<'a> Iterator for VisibleWindow<'a> {
    type Item = CellView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cols.is_empty() || self.next.row >= self.rows.end {
            return None;
        }
        let pos = self.next;
        let cell = self.table.get(pos.row, pos.col)?;

        self.next.col += 1;
        if self.next.col >= self.cols.end {
            self.next.col = self.cols.start;
            self.next.row += 1;
        }

        Some(CellView {
            row: pos.row,
            col: pos.col,
            cell,
            is_selected: pos == self.cursor,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for VisibleWindow<'_> {}
