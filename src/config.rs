//! Layout and launch configuration.
//!
//! Everything here has a sensible default, so a config file is optional. When
//! one is given it is JSON, and any field it leaves out keeps its default:
//!
//! ```json
//! { "layout": { "cell_width": 20 }, "output": "budget.csv" }
//! ```

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest row count a table may declare.
pub const MAX_ROWS: usize = 100;
/// Largest column count a table may declare.
pub const MAX_COLS: usize = 10;
/// Default destination for the save command.
pub const DEFAULT_OUTPUT: &str = "table.csv";

/// Per-cell footprint and fixed screen chrome, in terminal cells.
///
/// The visible extent of the grid is derived from these and the terminal size:
/// `visible_rows = (height - chrome_rows) / cell_height` and
/// `visible_cols = (width - chrome_cols) / (cell_width + separator)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Columns occupied by one cell, excluding the separator.
    pub cell_width: usize,
    /// Lines occupied by one row of cells.
    pub cell_height: usize,
    /// Columns between two adjacent cells.
    pub separator: usize,
    /// Lines reserved for headers, borders and the status area.
    pub chrome_rows: usize,
    /// Columns reserved for borders.
    pub chrome_cols: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_width: 15,
            cell_height: 3,
            separator: 1,
            chrome_rows: 4,
            chrome_cols: 2,
        }
    }
}

impl Layout {
    /// Columns one grid column takes up on screen.
    pub fn column_stride(&self) -> usize {
        self.cell_width + self.separator
    }

    /// Rejects layouts the renderer cannot draw.
    pub fn validate(&self) -> Result<()> {
        if self.cell_height == 0 {
            return Err(GridError::Configuration(
                "layout.cell_height must be at least 1".to_string(),
            ));
        }
        if self.cell_width < 2 {
            return Err(GridError::Configuration(format!(
                "layout.cell_width must be at least 2, got {}",
                self.cell_width
            )));
        }
        Ok(())
    }
}

/// Settings read from the optional config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen geometry.
    pub layout: Layout,
    /// Where the save command writes the table.
    pub output: PathBuf,
    /// Log destination; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
        let config: Config = serde_json::from_str(&text).map_err(|e| {
            GridError::Configuration(format!("{}: {}", path.display(), e))
        })?;
        config.layout.validate()?;
        Ok(config)
    }
}

/// Validates the declared table size against [`MAX_ROWS`] and [`MAX_COLS`].
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if !(1..=MAX_ROWS).contains(&rows) {
        return Err(GridError::out_of_range("rows", rows, MAX_ROWS));
    }
    if !(1..=MAX_COLS).contains(&cols) {
        return Err(GridError::out_of_range("columns", cols, MAX_COLS));
    }
    Ok(())
}
