use cpe_mapper::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock DatabaseStore holding a single database file
#[derive(Default, Clone)]
pub struct MockDatabaseStore {
    pub content: Arc<Mutex<Option<String>>>,
    pub writes: Arc<Mutex<usize>>,
}

impl MockDatabaseStore {
    /// A store where the database was never downloaded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_database(database: &serde_json::Value) -> Self {
        let store = Self::default();
        *store.content.lock().unwrap() = Some(database.to_string());
        store
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl DatabaseStore for MockDatabaseStore {
    fn read_database(&self, _path: &Path) -> Result<Option<String>> {
        Ok(self.content())
    }

    fn write_database(&self, _path: &Path, content: &str) -> Result<()> {
        *self.content.lock().unwrap() = Some(content.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
