//! Error types for Cellpad core.

use thiserror::Error;

use cellpad_engine::engine::AddressError;

use crate::features::Feature;

/// Errors that can occur while driving a document.
#[derive(Error, Debug)]
pub enum CellpadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("{0} is disabled")]
    FeatureDisabled(Feature),

    #[error("No selection")]
    NoSelection,

    #[error("Clipboard is empty")]
    ClipboardEmpty,
}

pub type Result<T> = std::result::Result<T, CellpadError>;
