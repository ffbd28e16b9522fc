//! Optional capabilities of a document.
//!
//! Every capability is on by default. Turning one off makes the matching
//! operations fail with [`CellpadError::FeatureDisabled`](crate::CellpadError)
//! and, for formulas, shows stored values verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Selection,
    Clipboard,
    Formulas,
    Bold,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Selection => "Selection",
            Feature::Clipboard => "Clipboard",
            Feature::Formulas => "Formulas",
            Feature::Bold => "Bold",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Features {
    pub selection: bool,
    pub clipboard: bool,
    pub formulas: bool,
    pub bold: bool,
}

impl Features {
    /// Everything enabled.
    pub fn all() -> Self {
        Self {
            selection: true,
            clipboard: true,
            formulas: true,
            bold: true,
        }
    }

    /// Plain editable grid with no extras.
    pub fn none() -> Self {
        Self {
            selection: false,
            clipboard: false,
            formulas: false,
            bold: false,
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Selection => self.selection,
            Feature::Clipboard => self.clipboard,
            Feature::Formulas => self.formulas,
            Feature::Bold => self.bold,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}
