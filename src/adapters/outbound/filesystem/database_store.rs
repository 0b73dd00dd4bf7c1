use crate::ports::outbound::DatabaseStore;
use crate::shared::error::CpeMapperError;
use crate::shared::security::{read_regular_file, reject_symlink};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// FileSystemDatabaseStore adapter for the local CPE mapping database
///
/// Writes go to a temporary file in the target directory which is then
/// renamed over the database, so readers never observe a partial file.
pub struct FileSystemDatabaseStore;

impl FileSystemDatabaseStore {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl ToString) -> anyhow::Error {
        CpeMapperError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemDatabaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseStore for FileSystemDatabaseStore {
    fn read_database(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        read_regular_file(path, "CPE database")
            .map(Some)
            .map_err(|e| {
                CpeMapperError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn write_database(&self, path: &Path, content: &str) -> Result<()> {
        reject_symlink(path, "write").map_err(|e| Self::write_error(path, e))?;

        let directory = match path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(directory).map_err(|e| Self::write_error(path, e))?;

        let mut temp_file =
            NamedTempFile::new_in(directory).map_err(|e| Self::write_error(path, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| Self::write_error(path, e))?;
        temp_file
            .persist(path)
            .map_err(|e| Self::write_error(path, e.error))?;

        Ok(())
    }
}
