//! In-memory port implementations shared by the use case tests

use crate::ports::outbound::{BomReader, BomWriter, DatabaseStore, ProgressReporter, RemoteDatabase};
use crate::shared::error::CpeMapperError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Serves a fixed database, or fails like an unreachable server.
/// Clones share their fetch counter.
#[derive(Clone)]
pub struct MockRemoteDatabase {
    database: Option<Value>,
    fetches: Arc<AtomicUsize>,
}

impl MockRemoteDatabase {
    pub fn serving(database: Value) -> Self {
        Self {
            database: Some(database),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            database: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteDatabase for MockRemoteDatabase {
    async fn fetch_database(&self, url: &str) -> Result<Value> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.database.clone().ok_or_else(|| {
            CpeMapperError::DatabaseFetchError {
                url: url.to_string(),
                details: "connection refused".to_string(),
            }
            .into()
        })
    }
}

/// Files kept in memory, keyed by path. Clones share the same files.
#[derive(Clone, Default)]
pub struct InMemoryFiles {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn put(&self, path: &Path, content: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
    }
}

impl BomReader for InMemoryFiles {
    fn read_bom(&self, path: &Path) -> Result<String> {
        self.get(path).ok_or_else(|| {
            CpeMapperError::InputFileNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}

impl BomWriter for InMemoryFiles {
    fn write_bom(&self, path: &Path, content: &str) -> Result<()> {
        self.put(path, content);
        Ok(())
    }
}

impl DatabaseStore for InMemoryFiles {
    fn read_database(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.get(path))
    }

    fn write_database(&self, path: &Path, content: &str) -> Result<()> {
        self.put(path, content);
        Ok(())
    }
}

/// Captures every reported message. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.messages().iter().any(|m| m.contains(fragment))
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Progress: {}/{} - {}", current, total, message.unwrap_or("")));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
