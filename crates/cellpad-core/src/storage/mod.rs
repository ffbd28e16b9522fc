//! Export of grid contents.

mod json;

pub use json::{CONTENT_TYPE, DEFAULT_FILE_NAME, write_json_content};
