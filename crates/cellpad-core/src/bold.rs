//! Set of cells shown in bold.

use std::collections::BTreeSet;

use cellpad_engine::engine::{Bounds, CellRef};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoldSet {
    cells: BTreeSet<CellRef>,
}

impl BoldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flip every cell of the rectangle independently: bold cells become
    /// plain, plain cells become bold. Callers clip `bounds` to the grid first.
    pub fn toggle(&mut self, bounds: Bounds) {
        for cell in bounds.cells() {
            if !self.cells.remove(&cell) {
                self.cells.insert(cell);
            }
        }
    }
}
