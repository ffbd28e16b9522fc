//! In-memory clipboard for grid data.

use cellpad_engine::engine::{CellRange, CellRef, Grid};

/// A rectangular block of values captured by a copy.
///
/// The values are owned copies; later edits to the source grid do not show
/// through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    cells: Vec<Vec<String>>,
}

impl Clipboard {
    /// Capture the normalized rectangle of `range`, clipped to the grid.
    /// A range entirely outside the grid gives an empty clipboard.
    pub fn copy(grid: &Grid, range: &CellRange) -> Self {
        let Some(bounds) = range.bounds().clip(grid.rows(), grid.cols()) else {
            return Self::default();
        };
        let cells = (bounds.min_row..=bounds.max_row)
            .map(|row| {
                (bounds.min_col..=bounds.max_col)
                    .map(|col| grid.get(row, col).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();
        Self { cells }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Write the block into `grid` with its top-left at `anchor`.
    ///
    /// Destination cells past the grid edge are skipped. Returns how many
    /// cells were written.
    pub fn paste_into(&self, grid: &mut Grid, anchor: CellRef) -> usize {
        let mut written = 0;
        for (dr, row) in self.cells.iter().enumerate() {
            for (dc, value) in row.iter().enumerate() {
                let (Some(r), Some(c)) = (anchor.row.checked_add(dr), anchor.col.checked_add(dc))
                else {
                    continue;
                };
                if grid.edit_cell(r, c, value.as_str()) {
                    written += 1;
                }
            }
        }
        written
    }
}
