use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading the SBOM to be mapped
pub trait BomReader {
    /// Reads the raw content of a BOM file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`CpeMapperError::InputFileNotFound`)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_bom(&self, path: &Path) -> Result<String>;
}
