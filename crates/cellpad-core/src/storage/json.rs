//! Writer for the JSON export format: an array of rows, each an array of strings.

use crate::error::Result;
use cellpad_engine::engine::Grid;

/// File name offered for exports.
pub const DEFAULT_FILE_NAME: &str = "spreadsheet.json";

/// Content type of the exported document.
pub const CONTENT_TYPE: &str = "application/json";

/// Write a Grid to a JSON string. Stored values are written, not computed ones.
pub fn write_json_content(grid: &Grid) -> Result<String> {
    Ok(serde_json::to_string(grid)?)
}
