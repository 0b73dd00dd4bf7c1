use crate::shared::Result;
use std::path::Path;

/// BomWriter port for persisting the mapped SBOM
pub trait BomWriter {
    /// Writes `content` to `path`, replacing any existing file
    fn write_bom(&self, path: &Path, content: &str) -> Result<()>;
}
