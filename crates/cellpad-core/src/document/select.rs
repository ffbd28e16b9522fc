use cellpad_engine::engine::CellRef;

use super::Document;
use crate::error::Result;
use crate::features::Feature;
use crate::selection::Selection;

impl Document {
    /// Pointer-down: replace any selection with a single cell and start dragging.
    pub fn begin_selection(&mut self, cell: CellRef) -> Result<()> {
        self.require(Feature::Selection)?;
        self.selection = Some(Selection::begin(cell));
        tracing::debug!(%cell, "selection started");
        Ok(())
    }

    /// Pointer-over: move the selection end while dragging.
    /// Returns false (and changes nothing) when no drag is in progress.
    pub fn extend_selection(&mut self, cell: CellRef) -> Result<bool> {
        self.require(Feature::Selection)?;
        let extended = self
            .selection
            .as_mut()
            .is_some_and(|selection| selection.extend(cell));
        if extended {
            tracing::trace!(%cell, "selection extended");
        }
        Ok(extended)
    }

    /// Pointer-up: stop dragging and keep the range.
    pub fn end_selection(&mut self) -> Result<()> {
        self.require(Feature::Selection)?;
        if let Some(selection) = self.selection.as_mut() {
            selection.finish();
            tracing::debug!(range = %selection.range, "selection finished");
        }
        Ok(())
    }

    pub fn is_selected(&self, cell: &CellRef) -> bool {
        self.selection.is_some_and(|selection| selection.contains(cell))
    }

    /// Selection as a label like `A1:B5`, or `A1` for a single cell.
    pub fn selection_label(&self) -> Option<String> {
        self.selection.map(|selection| selection.range.to_string())
    }
}
