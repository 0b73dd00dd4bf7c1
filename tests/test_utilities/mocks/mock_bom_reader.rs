use cpe_mapper::prelude::*;
use std::path::Path;

/// Mock BomReader for testing
pub struct MockBomReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockBomReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            return Err(CpeMapperError::InputFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
