use crate::ports::outbound::BomWriter;
use crate::shared::error::CpeMapperError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing the mapped BOM to a file
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(CpeMapperError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BomWriter for FileSystemWriter {
    fn write_bom(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        reject_symlink(path, "write").map_err(|e| CpeMapperError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| CpeMapperError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Mapped BOM saved");
        Ok(())
    }
}
