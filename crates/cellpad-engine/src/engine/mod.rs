//! Spreadsheet engine API.
//!
//! - [`Grid`] - Dense cell-value table and its growth
//! - [`CellRef`] - Cell address parsing (A1 notation <-> row/col indices)
//! - [`CellRange`], [`Bounds`] - Rectangular ranges and their normalized bounds
//! - [`evaluate`], [`display_value`] - `=SUM(range)` formula evaluation
//! - [`format_number`] - Format computed values for display

mod cell_ref;
mod format;
pub mod formula;
mod grid;
mod range;

pub use cell_ref::{AddressError, CellRef};
pub use format::format_number;
pub use formula::{CellKind, FormulaError, classify, display_value, evaluate, sum_range};
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, Grid};
pub use range::{Bounds, CellRange};
