use cpe_mapper::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock BomWriter that captures the written BOMs
#[derive(Default, Clone)]
pub struct MockBomWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MockBomWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.written.lock().unwrap().len()
    }

    /// Last written BOM, parsed
    pub fn last_json(&self) -> Option<serde_json::Value> {
        self.written
            .lock()
            .unwrap()
            .last()
            .map(|(_, content)| serde_json::from_str(content).unwrap())
    }
}

impl BomWriter for MockBomWriter {
    fn write_bom(&self, path: &Path, content: &str) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
