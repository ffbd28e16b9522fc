//! Cell address parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style addresses
//! (e.g., "A1", "B3", "AA100") and zero-indexed row/column coordinates.
//!
//! Column letters are bijective base-26: there is no zero digit, so `Z` is
//! followed by `AA` rather than `BA`.
//!
//! # Examples
//!
//! ```
//! use cellpad_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("B3").unwrap();
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors produced while decoding an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid cell address: {0:?}")]
    InvalidAddress(String),
}

/// A reference to a cell by row and column indices (0-indexed).
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Z]+)(?<numbers>[0-9]+)$").expect("address regex must compile")
    })
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse an address in A1 notation. Only upper-case column letters are accepted.
    pub fn parse(address: &str) -> Result<CellRef, AddressError> {
        let invalid = || AddressError::InvalidAddress(address.to_string());

        let caps = address_re().captures(address).ok_or_else(invalid)?;
        let col = Self::letters_to_col(&caps["letters"]).map_err(|_| invalid())?;
        let row = caps["numbers"]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(invalid)?;

        Ok(CellRef::new(row, col))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// Convert column letters back to a zero-based index (A -> 0, AA -> 26).
    pub fn letters_to_col(letters: &str) -> Result<usize, AddressError> {
        let invalid = || AddressError::InvalidAddress(letters.to_string());
        if letters.is_empty() {
            return Err(invalid());
        }

        let mut acc = 0usize;
        for c in letters.bytes() {
            if !c.is_ascii_uppercase() {
                return Err(invalid());
            }
            let digit = (c - b'A') as usize + 1;
            acc = acc
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(invalid)?;
        }
        Ok(acc - 1)
    }

    /// Format this cell as an A1 address.
    pub fn to_address(&self) -> String {
        self.to_string()
    }
}

impl std::str::FromStr for CellRef {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row as u128 + 1)
    }
}
