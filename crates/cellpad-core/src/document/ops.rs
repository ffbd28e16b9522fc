use cellpad_engine::engine::{CellRef, display_value};

use super::Document;
use crate::clipboard::Clipboard;
use crate::error::{CellpadError, Result};
use crate::features::Feature;
use crate::selection::Selection;

impl Document {
    pub(crate) fn require(&self, feature: Feature) -> Result<()> {
        if self.features.is_enabled(feature) {
            Ok(())
        } else {
            Err(CellpadError::FeatureDisabled(feature))
        }
    }

    pub(crate) fn require_selection(&self) -> Result<Selection> {
        self.selection.ok_or(CellpadError::NoSelection)
    }

    /// Stored value of a cell, or `None` outside the grid.
    pub fn value(&self, cell: &CellRef) -> Option<&str> {
        self.grid.get(cell.row, cell.col)
    }

    /// Value to show for a cell: the computed result for a recognized formula,
    /// otherwise the stored text.
    pub fn display_value(&self, cell: &CellRef) -> Option<String> {
        let stored = self.value(cell)?;
        if self.features.formulas {
            Some(display_value(stored, &self.grid))
        } else {
            Some(stored.to_string())
        }
    }

    /// Replace a cell's value. Targets outside the grid are ignored.
    /// Returns whether the cell was written.
    pub fn edit_cell(&mut self, cell: CellRef, value: &str) -> bool {
        if !self.grid.in_bounds(cell.row, cell.col) {
            tracing::debug!(%cell, "edit outside grid ignored");
            return false;
        }
        if self.value(&cell) == Some(value) {
            return true;
        }
        self.grid_mut().edit_cell(cell.row, cell.col, value);
        self.modified = true;
        tracing::debug!(%cell, value, "cell edited");
        true
    }

    pub fn add_row(&mut self) {
        self.grid_mut().add_row();
        self.modified = true;
        tracing::debug!(rows = self.rows(), cols = self.cols(), "row added");
    }

    pub fn add_column(&mut self) {
        self.grid_mut().add_column();
        self.modified = true;
        tracing::debug!(rows = self.rows(), cols = self.cols(), "column added");
    }

    /// Copy the selected block to the clipboard, replacing its previous contents.
    /// Returns the number of cells copied.
    pub fn copy_selection(&mut self) -> Result<usize> {
        self.require(Feature::Clipboard)?;
        let selection = self.require_selection()?;
        let clipboard = Clipboard::copy(&self.grid, &selection.range);
        let count = clipboard.width() * clipboard.height();
        tracing::debug!(range = %selection.range, count, "copied selection");
        self.clipboard = Some(clipboard);
        Ok(count)
    }

    /// Paste the clipboard with its top-left at the selection's top-left.
    /// Cells that would land outside the grid are skipped.
    /// Returns the number of cells written.
    pub fn paste(&mut self) -> Result<usize> {
        self.require(Feature::Clipboard)?;
        let selection = self.require_selection()?;
        let clipboard = match self.clipboard.take() {
            Some(clipboard) if !clipboard.is_empty() => clipboard,
            other => {
                self.clipboard = other;
                return Err(CellpadError::ClipboardEmpty);
            }
        };

        let anchor = selection.anchor();
        let written = clipboard.paste_into(self.grid_mut(), anchor);
        self.clipboard = Some(clipboard);
        if written > 0 {
            self.modified = true;
        }
        tracing::debug!(%anchor, written, "pasted clipboard");
        Ok(written)
    }

    /// Flip bold on every selected cell independently. Only cells inside the
    /// grid are touched.
    pub fn toggle_bold(&mut self) -> Result<()> {
        self.require(Feature::Bold)?;
        let selection = self.require_selection()?;
        if let Some(bounds) = selection.bounds().clip(self.rows(), self.cols()) {
            self.bold.toggle(bounds);
        }
        tracing::debug!(range = %selection.range, bold = self.bold.len(), "toggled bold");
        Ok(())
    }

    pub fn is_bold(&self, cell: &CellRef) -> bool {
        self.bold.contains(cell)
    }
}
