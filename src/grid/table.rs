//! Contiguous cell storage.

use super::cell::Cell;
use super::position::CellPosition;
use crate::config::validate_dimensions;
use crate::error::Result;
use std::ops::Index;

/// A `row_count × col_count` table of cells.
///
/// Cells live in a single row-major buffer sized exactly to the declared
/// extent and indexed by `row * col_count + col`. The extent is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    row_count: usize,
    col_count: usize,
    cells: Vec<Cell>,
}

/// A single empty cell.
impl Default for Table {
    fn default() -> Self {
        Self {
            row_count: 1,
            col_count: 1,
            cells: vec![Cell::new()],
        }
    }
}

impl Table {
    /// Creates an empty table, rejecting sizes outside
    /// `[1, MAX_ROWS] × [1, MAX_COLS]`.
    pub fn new(row_count: usize, col_count: usize) -> Result<Self> {
        validate_dimensions(row_count, col_count)?;
        Ok(Self {
            row_count,
            col_count,
            cells: vec![Cell::new(); row_count * col_count],
        })
    }

    /// Declared number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Declared number of columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// The cell at `(row, col)`, or `None` outside the declared extent.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    /// Rows in order, each a slice of `col_count` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.col_count)
    }

    /// Stores `text` at `(row, col)`, truncating to cell capacity.
    ///
    /// Returns the number of dropped characters, or `None` when the coordinate
    /// is outside the table.
    pub(crate) fn store(&mut self, row: usize, col: usize, text: &str) -> Option<usize> {
        let i = self.offset(row, col)?;
        Some(self.cells[i].store(text))
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.row_count && col < self.col_count {
            Some(row * self.col_count + col)
        } else {
            None
        }
    }
}

impl Index<CellPosition> for Table {
    type Output = Cell;

    /// Panics when `pos` is outside the declared extent; use [`Table::get`]
    /// for a checked lookup.
    fn index(&self, pos: CellPosition) -> &Cell {
        match self.offset(pos.row, pos.col) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell {pos} outside {}x{} table",
                self.row_count, self.col_count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_COLS, MAX_ROWS};

    #[test]
    fn test_new_table_sized_exactly() {
        let table = Table::new(3, 2).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.col_count(), 2);
        assert_eq!(table.cells.len(), 6);
        assert!(table.cells.iter().all(Cell::is_empty));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Table::new(0, 1).is_err());
        assert!(Table::new(1, 0).is_err());
        assert!(Table::new(MAX_ROWS + 1, 1).is_err());
        assert!(Table::new(1, MAX_COLS + 1).is_err());
        assert!(Table::new(MAX_ROWS, MAX_COLS).is_ok());
    }

    #[test]
    fn test_row_major_indexing() {
        let mut table = Table::new(3, 4).unwrap();
        table.store(1, 2, "here").unwrap();

        assert_eq!(table.cells[6].text(), "here");
        assert_eq!(table.get(1, 2).unwrap().text(), "here");
        assert!(table.get(2, 1).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_extent_access() {
        let mut table = Table::new(2, 2).unwrap();
        assert!(table.get(2, 0).is_none());
        assert!(table.get(0, 2).is_none());
        assert!(table.store(5, 5, "x").is_none());
    }

    #[test]
    fn test_index_by_position() {
        let mut table = Table::new(2, 2).unwrap();
        table.store(1, 1, "corner").unwrap();
        assert_eq!(table[CellPosition::new(1, 1)].text(), "corner");
    }

    #[test]
    #[should_panic]
    fn test_index_outside_extent_panics() {
        let table = Table::new(2, 2).unwrap();
        let _ = &table[CellPosition::new(2, 0)];
    }

    #[test]
    fn test_rows_iterates_in_order() {
        let mut table = Table::new(2, 3).unwrap();
        table.store(1, 0, "second").unwrap();

        let rows: Vec<&[Cell]> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][0].text(), "second");
    }
}
