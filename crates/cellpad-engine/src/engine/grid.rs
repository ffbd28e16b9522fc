//! The cell-value table.
//!
//! A [`Grid`] is a dense, rectangular table of strings. Every row has the
//! same length; growth operations keep it that way.

use serde::{Serialize, Serializer};

/// Default number of rows and columns for a new sheet.
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    // Tracked separately so a grid with no rows still knows its width.
    cols: usize,
}

impl Grid {
    /// Create a grid of `rows` x `cols` empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![String::new(); cols]; rows],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols
    }

    /// Replace the value at (row, col).
    ///
    /// Out-of-bounds targets are ignored; returns whether the cell was written.
    pub fn edit_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }

    /// Append one empty row at the bottom.
    pub fn add_row(&mut self) {
        self.cells.push(vec![String::new(); self.cols]);
    }

    /// Append one empty column on the right.
    pub fn add_column(&mut self) {
        for row in &mut self.cells {
            row.push(String::new());
        }
        self.cols += 1;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl From<Vec<Vec<String>>> for Grid {
    /// Build a grid from rows, padding short rows with empty cells.
    fn from(mut cells: Vec<Vec<String>>) -> Self {
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(cols, String::new());
        }
        Self { cells, cols }
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_rectangular(grid: &Grid) -> bool {
        grid.iter_rows().all(|r| r.len() == grid.cols())
    }

    #[test]
    fn test_default_is_ten_by_ten_empty() {
        let grid = Grid::default();
        assert_eq!((grid.rows(), grid.cols()), (10, 10));
        assert!(grid.iter_rows().flatten().all(String::is_empty));
    }

    #[test]
    fn test_add_row_then_column() {
        let mut grid = Grid::default();
        grid.add_row();
        grid.add_column();
        assert_eq!((grid.rows(), grid.cols()), (11, 11));
        assert!(is_rectangular(&grid));
        assert!(grid.iter_rows().flatten().all(String::is_empty));
    }

    #[test]
    fn test_add_column_then_row() {
        let mut grid = Grid::default();
        grid.add_column();
        grid.add_row();
        assert_eq!((grid.rows(), grid.cols()), (11, 11));
        assert!(is_rectangular(&grid));
    }

    #[test]
    fn test_add_row_on_zero_height_keeps_width() {
        let mut grid = Grid::new(0, 3);
        grid.add_row();
        assert_eq!(grid.rows(), 1);
        assert!(grid.in_bounds(0, 2));
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn test_edit_cell_out_of_bounds_is_noop() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.edit_cell(1, 1, "x"));
        assert!(!grid.edit_cell(2, 0, "y"));
        assert!(!grid.edit_cell(0, 2, "z"));
        assert_eq!(grid.get(1, 1), Some("x"));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(1, 1);
        let before = grid.clone();
        grid.edit_cell(0, 0, "changed");
        assert_eq!(before.get(0, 0), Some(""));
    }

    #[test]
    fn test_from_rows_pads_ragged_input() {
        let grid = Grid::from(vec![vec!["a".to_string()], vec!["b".into(), "c".into()]]);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 1), Some(""));
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let mut grid = Grid::new(2, 2);
        grid.edit_cell(0, 1, "x");
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["","x"],["",""]]"#);
    }
}
