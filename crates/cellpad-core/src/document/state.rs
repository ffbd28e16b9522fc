use cellpad_engine::engine::Grid;
use std::sync::Arc;

use crate::bold::BoldSet;
use crate::clipboard::Clipboard;
use crate::features::Features;
use crate::selection::Selection;

/// UI-agnostic state of one spreadsheet.
pub struct Document {
    /// Cell values. Writes go through `Arc::make_mut`, so a snapshot handed
    /// out by [`Document::grid`] never changes underneath its holder.
    pub(crate) grid: Arc<Grid>,
    /// Current selection rectangle, if any
    pub(crate) selection: Option<Selection>,
    /// Cells displayed in bold
    pub(crate) bold: BoldSet,
    /// Last copied block
    pub(crate) clipboard: Option<Clipboard>,
    /// Enabled capabilities
    pub(crate) features: Features,
    /// Whether the grid changed since the last export
    pub modified: bool,
}

impl Document {
    /// Create a document with the default 10x10 grid and every feature on.
    pub fn new() -> Self {
        Self::with_grid(Grid::default(), Features::default())
    }

    pub fn with_size(rows: usize, cols: usize, features: Features) -> Self {
        Self::with_grid(Grid::new(rows, cols), features)
    }

    pub fn with_grid(grid: Grid, features: Features) -> Self {
        Document {
            grid: Arc::new(grid),
            selection: None,
            bold: BoldSet::new(),
            clipboard: None,
            features,
            modified: false,
        }
    }

    /// A handle to the current grid state.
    pub fn grid(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn bold(&self) -> &BoldSet {
        &self.bold
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        Arc::make_mut(&mut self.grid)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
