//! Formula detection and evaluation.
//!
//! A cell whose value starts with `=` is a formula. The only recognized shape
//! is `=SUM(<start>:<end>)`. Evaluation reads the grid and never writes to it;
//! the stored value stays the literal formula text.
//!
//! [`evaluate`] is the strict form and reports why a formula could not be
//! computed. [`display_value`] is the total form used for rendering: it falls
//! back to the literal text on any failure.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::cell_ref::{AddressError, CellRef};
use super::format::format_number;
use super::grid::Grid;
use super::range::CellRange;

/// How a stored value is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Literal,
    Formula,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Not a formula")]
    NotAFormula,

    #[error("Unrecognized formula: {0}")]
    Unrecognized(String),

    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Matches `=SUM(A1:B5)`.
/// - group 1: start address
/// - group 2: end address
fn sum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^=SUM\(([A-Z]+[0-9]+):([A-Z]+[0-9]+)\)$").expect("SUM regex must compile")
    })
}

pub fn classify(value: &str) -> CellKind {
    if value.starts_with('=') {
        CellKind::Formula
    } else {
        CellKind::Literal
    }
}

/// Parse a cell value as a number for summing. Empty, non-numeric and
/// non-finite values (`inf`, `NaN`) yield `None`.
fn numeric_value(value: &str) -> Option<f64> {
    let n = value.trim().parse::<f64>().ok()?;
    n.is_finite().then_some(n)
}

/// Sum the numeric cells of a range. Cells outside the grid contribute nothing.
pub fn sum_range(grid: &Grid, range: &CellRange) -> f64 {
    let Some(bounds) = range.bounds().clip(grid.rows(), grid.cols()) else {
        return 0.0;
    };
    bounds
        .cells()
        .filter_map(|cell| grid.get(cell.row, cell.col))
        .filter_map(numeric_value)
        .sum()
}

/// Evaluate a formula against the grid.
pub fn evaluate(value: &str, grid: &Grid) -> Result<f64, FormulaError> {
    if classify(value) == CellKind::Literal {
        return Err(FormulaError::NotAFormula);
    }
    let caps = sum_re()
        .captures(value)
        .ok_or_else(|| FormulaError::Unrecognized(value.to_string()))?;
    let start = CellRef::parse(&caps[1])?;
    let end = CellRef::parse(&caps[2])?;
    Ok(sum_range(grid, &CellRange::new(start, end)))
}

/// The value to show for a stored cell value.
///
/// Literals are returned unchanged. A recognized formula becomes its computed
/// result; anything else that fails to evaluate is shown as written.
pub fn display_value(value: &str, grid: &Grid) -> String {
    match evaluate(value, grid) {
        Ok(n) => format_number(n),
        Err(FormulaError::NotAFormula) => value.to_string(),
        Err(err) => {
            tracing::trace!(%err, value, "formula fell back to literal text");
            value.to_string()
        }
    }
}
