//! Markdown rendering of a document snapshot

use cellpad_core::Snapshot;
use std::io::Write;

/// Write the snapshot as a markdown table with column letters and 1-based row numbers.
/// Bold cells are wrapped in `**`.
pub fn write_markdown<W: Write>(w: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    if snapshot.column_labels.is_empty() {
        writeln!(w, "*Empty spreadsheet*")?;
        return Ok(());
    }

    write!(w, "|   |")?;
    for label in &snapshot.column_labels {
        write!(w, " {} |", label)?;
    }
    writeln!(w)?;

    write!(w, "|---|")?;
    for _ in &snapshot.column_labels {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for (row, cells) in snapshot.rows.iter().enumerate() {
        write!(w, "| {} |", row + 1)?;
        for cell in cells {
            let text = escape_markdown(&cell.display);
            if cell.bold && !text.is_empty() {
                write!(w, " **{}** |", text)?;
            } else {
                write!(w, " {} |", text)?;
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
