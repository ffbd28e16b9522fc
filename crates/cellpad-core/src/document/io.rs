use super::Document;
use crate::error::Result;
use crate::storage::{CONTENT_TYPE, DEFAULT_FILE_NAME, write_json_content};
use std::fs;
use std::path::Path;

/// A serialized grid ready to hand to whatever saves or downloads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

impl Export {
    /// Save the payload to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.data)?;
        tracing::debug!(path = %path.display(), bytes = self.data.len(), "export written");
        Ok(())
    }
}

impl Document {
    /// Serialize the whole grid as JSON under the default file name.
    pub fn export(&self) -> Result<Export> {
        let data = write_json_content(&self.grid)?.into_bytes();
        tracing::debug!(bytes = data.len(), rows = self.rows(), cols = self.cols(), "grid exported");
        Ok(Export {
            file_name: DEFAULT_FILE_NAME.to_string(),
            content_type: CONTENT_TYPE,
            data,
        })
    }
}
