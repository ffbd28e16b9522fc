//! Pointer-driven range selection.

use cellpad_engine::engine::{Bounds, CellRange, CellRef};

/// The current selection rectangle.
///
/// `dragging` is true between pointer-down and pointer-up; only then does
/// [`Selection::extend`] move the end point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub range: CellRange,
    pub dragging: bool,
}

impl Selection {
    /// Start a new selection at `cell` (pointer-down).
    pub fn begin(cell: CellRef) -> Self {
        Self {
            range: CellRange::single(cell),
            dragging: true,
        }
    }

    /// Move the end point (pointer-over). Returns false when not dragging.
    pub fn extend(&mut self, cell: CellRef) -> bool {
        if !self.dragging {
            return false;
        }
        self.range.end = cell;
        true
    }

    /// Stop dragging (pointer-up). The range stays.
    pub fn finish(&mut self) {
        self.dragging = false;
    }

    pub fn bounds(&self) -> Bounds {
        self.range.bounds()
    }

    /// Top-left corner of the normalized rectangle.
    pub fn anchor(&self) -> CellRef {
        self.bounds().top_left()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.range.contains(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_both_ends() {
        let sel = Selection::begin(CellRef::new(3, 4));
        assert_eq!(sel.range.start, CellRef::new(3, 4));
        assert_eq!(sel.range.end, CellRef::new(3, 4));
        assert!(sel.dragging);
    }

    #[test]
    fn test_extend_only_while_dragging() {
        let mut sel = Selection::begin(CellRef::new(3, 3));
        assert!(sel.extend(CellRef::new(1, 5)));
        sel.finish();
        assert!(!sel.extend(CellRef::new(9, 9)));
        assert_eq!(sel.range.end, CellRef::new(1, 5));
        assert_eq!(sel.anchor(), CellRef::new(1, 3));
        assert!(sel.contains(&CellRef::new(2, 4)));
        assert!(!sel.contains(&CellRef::new(0, 4)));
    }
}
