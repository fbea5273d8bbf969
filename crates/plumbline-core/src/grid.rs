//! Immutable worksheet grid

use crate::cell::CellValue;

/// A read-only 2D grid of cells loaded from a single worksheet.
///
/// The grid is row-major and ragged: rows keep only the cells the source file
/// stored, so accessors treat any out-of-range coordinate as [`CellValue::Empty`]
/// rather than an error. Once constructed the grid is never mutated; the parser
/// makes a single pass over it (plus an independent bottom-up pass for summary
/// rows) and owns nothing beyond that.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    /// Worksheet name as it appears in the workbook
    name: String,
    /// Row-major cell storage
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Build a grid from pre-assembled rows
    pub fn from_rows<S: Into<String>>(name: S, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Get the worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the grid (0 for an empty sheet)
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get a cell by row and column index; out-of-range is `Empty`
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Get a whole row; out-of-range is an empty slice
    pub fn row(&self, row: usize) -> &[CellValue] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if no row holds a non-empty cell
    pub fn is_blank(&self) -> bool {
        self.rows
            .iter()
            .all(|r| r.iter().all(CellValue::is_empty))
    }
}
