//! Line-oriented command shell over a [`Document`].
//!
//! Each command is translated into the same normalized events a graphical
//! front end would send, so the shell exercises the document exactly the way
//! a pointer-and-button UI does.

use cellpad_core::{CellRef, Document, Effect, Event};
use cellpad_engine::engine::CellRange;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, ShellError};
use crate::render::write_markdown;

/// Whether the shell should keep reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Shell {
    pub doc: Document,
    /// Default export destination.
    pub export_file: PathBuf,
    /// Feedback from the last command.
    pub status_message: String,
}

fn parse_cell(arg: Option<&str>, usage: &'static str) -> Result<CellRef> {
    let arg = arg.ok_or(ShellError::Usage(usage))?;
    Ok(CellRef::parse(arg)?)
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            doc: Document::with_size(config.rows, config.cols, config.features),
            export_file: config.export_file.clone(),
            status_message: String::new(),
        }
    }

    /// Execute one command line. Output meant for the user (`get`, `print`)
    /// is written to `out`.
    pub fn execute_command<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Control> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Control::Continue);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest.trim_start())),
            None => (line, None),
        };
        let arg = rest.filter(|s| !s.is_empty());

        match command {
            "set" => {
                let (address, value) = match arg.map(|a| a.split_once(char::is_whitespace)) {
                    Some(Some((address, value))) => (address, value),
                    Some(None) => (arg.unwrap_or_default(), ""),
                    None => return Err(ShellError::Usage("set CELL [TEXT]")),
                };
                let cell = CellRef::parse(address)?;
                self.doc.apply(Event::CellEdit {
                    row: cell.row,
                    col: cell.col,
                    value: value.to_string(),
                })?;
                self.status_message = if self.doc.value(&cell).is_some() {
                    format!("{} = {}", cell, value)
                } else {
                    format!("{} is outside the grid", cell)
                };
            }
            "addrow" | "ar" => {
                self.doc.apply(Event::AddRow)?;
                self.status_message = format!("{} rows", self.doc.rows());
            }
            "addcol" | "ac" => {
                self.doc.apply(Event::AddColumn)?;
                self.status_message = format!("{} columns", self.doc.cols());
            }
            "select" | "sel" => {
                let range = CellRange::parse(arg.ok_or(ShellError::Usage("select CELL[:CELL]"))?)?;
                self.press(range.start)?;
                self.drag(range.end)?;
                self.release()?;
            }
            "press" => {
                let cell = parse_cell(arg, "press CELL")?;
                self.press(cell)?;
            }
            "drag" => {
                let cell = parse_cell(arg, "drag CELL")?;
                self.drag(cell)?;
            }
            "release" => self.release()?,
            "copy" | "y" => {
                self.doc.apply(Event::CopyRequest)?;
                self.status_message = format!("Copied {}", self.selection_label());
            }
            "paste" | "p" => {
                self.doc.apply(Event::PasteRequest)?;
                self.status_message = format!("Pasted at {}", self.selection_label());
            }
            "bold" | "b" => {
                self.doc.apply(Event::BoldToggleRequest)?;
                self.status_message = format!("Toggled bold on {}", self.selection_label());
            }
            "get" => {
                let cell = parse_cell(arg, "get CELL")?;
                match self.doc.display_value(&cell) {
                    Some(value) => writeln!(out, "{}", value)?,
                    None => self.status_message = format!("{} is outside the grid", cell),
                }
            }
            "print" => {
                write_markdown(out, &self.doc.snapshot())?;
            }
            "export" | "w" => {
                let path = arg.map(PathBuf::from).unwrap_or_else(|| self.export_file.clone());
                self.export(&path)?;
            }
            "q" | "quit" => return Ok(Control::Quit),
            _ => return Err(ShellError::UnknownCommand(command.to_string())),
        }
        Ok(Control::Continue)
    }

    /// Ask the document for an export and save the payload to `path`.
    pub fn export(&mut self, path: &Path) -> Result<()> {
        match self.doc.apply(Event::ExportRequest)? {
            Effect::Export(export) => {
                export.write_to(path)?;
                self.doc.modified = false;
                self.status_message = format!(
                    "Exported {} ({}) to {}",
                    export.file_name,
                    export.content_type,
                    path.display()
                );
            }
            Effect::None => {}
        }
        Ok(())
    }

    fn press(&mut self, cell: CellRef) -> Result<()> {
        self.doc.apply(Event::SelectionStart {
            row: cell.row,
            col: cell.col,
        })?;
        self.status_message = format!("Selected {}", self.selection_label());
        Ok(())
    }

    fn drag(&mut self, cell: CellRef) -> Result<()> {
        self.doc.apply(Event::SelectionExtend {
            row: cell.row,
            col: cell.col,
        })?;
        self.status_message = format!("Selected {}", self.selection_label());
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.doc.apply(Event::SelectionEnd)?;
        Ok(())
    }

    fn selection_label(&self) -> String {
        self.doc
            .selection_label()
            .unwrap_or_else(|| "nothing".to_string())
    }
}
