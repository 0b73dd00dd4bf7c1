use crate::ports::outbound::BomReader;
use crate::shared::error::CpeMapperError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading BOM files from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for FileSystemReader {
    fn read_bom(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CpeMapperError::InputFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        read_regular_file(path, "BOM file").map_err(|e| {
            CpeMapperError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
