//! Rectangular cell ranges.
//!
//! A [`CellRange`] keeps its two endpoints exactly as given (anchor and drag
//! end). Anything that walks the rectangle goes through [`CellRange::bounds`],
//! which normalizes per axis.

use super::cell_ref::{AddressError, CellRef};
use std::fmt;

/// Normalized, inclusive bounds of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row >= self.min_row
            && cell.row <= self.max_row
            && cell.col >= self.min_col
            && cell.col <= self.max_col
    }

    pub fn top_left(&self) -> CellRef {
        CellRef::new(self.min_row, self.min_col)
    }

    /// Every cell in the rectangle, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + use<> {
        let Bounds {
            min_row,
            max_row,
            min_col,
            max_col,
        } = *self;
        (min_row..=max_row).flat_map(move |row| (min_col..=max_col).map(move |col| CellRef::new(row, col)))
    }

    /// Clip to a grid of `rows` x `cols`. Returns `None` if nothing overlaps.
    pub fn clip(&self, rows: usize, cols: usize) -> Option<Bounds> {
        if rows == 0 || cols == 0 || self.min_row >= rows || self.min_col >= cols {
            return None;
        }
        Some(Bounds {
            min_row: self.min_row,
            max_row: self.max_row.min(rows - 1),
            min_col: self.min_col,
            max_col: self.max_col.min(cols - 1),
        })
    }
}

/// A range given by two corner cells, in no particular order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    pub fn single(cell: CellRef) -> Self {
        Self::new(cell, cell)
    }

    /// Parse `A1:B5` (or a lone `A1`, which becomes a one-cell range).
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(CellRef::parse(start)?, CellRef::parse(end)?)),
            None => CellRef::parse(s).map(Self::single),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_row: self.start.row.min(self.end.row),
            max_row: self.start.row.max(self.end.row),
            min_col: self.start.col.min(self.end.col),
            max_col: self.start.col.max(self.end.col),
        }
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.bounds().contains(cell)
    }
}

impl fmt::Display for CellRange {
    /// Normalized label: `A1` for a single cell, otherwise `A1:B2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.bounds();
        let top_left = bounds.top_left();
        let bottom_right = CellRef::new(bounds.max_row, bounds.max_col);
        if top_left == bottom_right {
            write!(f, "{}", top_left)
        } else {
            write!(f, "{}:{}", top_left, bottom_right)
        }
    }
}
