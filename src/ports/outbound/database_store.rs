use crate::shared::Result;
use std::path::Path;

/// DatabaseStore port for the locally persisted CPE mapping database
pub trait DatabaseStore {
    /// Reads the local database.
    ///
    /// # Returns
    /// `None` when no database exists at `path` yet
    fn read_database(&self, path: &Path) -> Result<Option<String>>;

    /// Replaces the local database with `content` as a whole
    fn write_database(&self, path: &Path, content: &str) -> Result<()>;
}
