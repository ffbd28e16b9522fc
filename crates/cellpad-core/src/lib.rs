//! cellpad-core - UI-agnostic spreadsheet model and export.

pub mod bold;
pub mod clipboard;
pub mod document;
pub mod error;
pub mod features;
pub mod selection;
pub mod storage;

pub use document::{CellView, Document, Effect, Event, Export, Snapshot};
pub use error::{CellpadError, Result};
pub use features::{Feature, Features};

pub use cellpad_engine::engine::CellRef;
