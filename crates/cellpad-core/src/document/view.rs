//! Render projection of a document.

use cellpad_engine::engine::{CellRef, display_value};
use serde::Serialize;

use super::Document;

/// Everything the presentation layer needs to draw one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub stored: String,
    pub display: String,
    pub bold: bool,
    pub selected: bool,
}

/// A full frame: column header labels plus one row of [`CellView`]s per grid row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub column_labels: Vec<String>,
    pub rows: Vec<Vec<CellView>>,
}

impl Snapshot {
    pub fn cell(&self, cell: &CellRef) -> Option<&CellView> {
        self.rows.get(cell.row)?.get(cell.col)
    }
}

impl Document {
    /// Project the document into a renderable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let column_labels = (0..self.cols()).map(CellRef::col_to_letters).collect();
        let rows = self
            .grid
            .iter_rows()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, stored)| {
                        let cell = CellRef::new(row, col);
                        let display = if self.features.formulas {
                            display_value(stored, &self.grid)
                        } else {
                            stored.clone()
                        };
                        CellView {
                            stored: stored.clone(),
                            display,
                            bold: self.is_bold(&cell),
                            selected: self.is_selected(&cell),
                        }
                    })
                    .collect()
            })
            .collect();
        Snapshot {
            column_labels,
            rows,
        }
    }
}
