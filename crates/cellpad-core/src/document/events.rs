//! Normalized input events and their dispatch.
//!
//! The presentation layer translates pointer, keyboard and button input into
//! [`Event`]s; [`Document::apply`] routes each one to the matching operation.

use cellpad_engine::engine::CellRef;

use super::Document;
use super::io::Export;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Replace a cell's value.
    CellEdit { row: usize, col: usize, value: String },

    /// Append an empty row at the bottom.
    AddRow,

    /// Append an empty column on the right.
    AddColumn,

    /// Pointer pressed on a cell.
    SelectionStart { row: usize, col: usize },

    /// Pointer moved over a cell while pressed.
    SelectionExtend { row: usize, col: usize },

    /// Pointer released.
    SelectionEnd,

    /// Copy the selection to the clipboard.
    CopyRequest,

    /// Paste the clipboard at the selection.
    PasteRequest,

    /// Toggle bold on the selection.
    BoldToggleRequest,

    /// Serialize the grid for download.
    ExportRequest,
}

/// What the caller has to do after an event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Re-render; nothing else to do.
    None,
    /// Hand the payload to the download/save collaborator.
    Export(Export),
}

impl Document {
    /// Apply an input event.
    pub fn apply(&mut self, event: Event) -> Result<Effect> {
        match event {
            Event::CellEdit { row, col, value } => {
                self.edit_cell(CellRef::new(row, col), &value);
            }
            Event::AddRow => self.add_row(),
            Event::AddColumn => self.add_column(),
            Event::SelectionStart { row, col } => self.begin_selection(CellRef::new(row, col))?,
            Event::SelectionExtend { row, col } => {
                self.extend_selection(CellRef::new(row, col))?;
            }
            Event::SelectionEnd => self.end_selection()?,
            Event::CopyRequest => {
                self.copy_selection()?;
            }
            Event::PasteRequest => {
                self.paste()?;
            }
            Event::BoldToggleRequest => self.toggle_bold()?,
            Event::ExportRequest => return Ok(Effect::Export(self.export()?)),
        }
        Ok(Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CellpadError;

    fn edit(row: usize, col: usize, value: &str) -> Event {
        Event::CellEdit {
            row,
            col,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_event_sequence() {
        let mut doc = Document::new();
        let events = vec![
            edit(0, 0, "1"),
            edit(1, 0, "2"),
            Event::AddRow,
            Event::AddColumn,
            edit(10, 10, "=SUM(A1:A2)"),
            Event::SelectionStart { row: 0, col: 0 },
            Event::SelectionExtend { row: 1, col: 0 },
            Event::SelectionEnd,
            Event::CopyRequest,
            Event::SelectionStart { row: 0, col: 1 },
            Event::SelectionEnd,
            Event::PasteRequest,
            Event::BoldToggleRequest,
        ];
        for event in events {
            assert_eq!(doc.apply(event).unwrap(), Effect::None);
        }

        assert_eq!((doc.rows(), doc.cols()), (11, 11));
        assert_eq!(doc.value(&CellRef::new(0, 1)), Some("1"));
        assert_eq!(doc.value(&CellRef::new(1, 1)), Some("2"));
        assert!(doc.is_bold(&CellRef::new(0, 1)));
        assert!(!doc.is_bold(&CellRef::new(1, 1)));
        assert_eq!(doc.display_value(&CellRef::new(10, 10)).as_deref(), Some("3"));
    }

    #[test]
    fn test_export_event_returns_payload() {
        let mut doc = Document::new();
        match doc.apply(Event::ExportRequest).unwrap() {
            Effect::Export(export) => assert_eq!(export.file_name, "spreadsheet.json"),
            Effect::None => panic!("expected an export"),
        }
    }

    #[test]
    fn test_failed_event_leaves_state() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.apply(Event::PasteRequest),
            Err(CellpadError::NoSelection)
        ));
        assert!(!doc.modified);
    }
}
