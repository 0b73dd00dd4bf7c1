use async_trait::async_trait;
use cpe_mapper::prelude::*;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RemoteDatabase serving a fixed document
#[derive(Clone)]
pub struct MockRemoteDatabase {
    pub database: Option<Value>,
    pub fetches: Arc<AtomicUsize>,
}

impl MockRemoteDatabase {
    pub fn new(database: Value) -> Self {
        Self {
            database: Some(database),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure() -> Self {
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
        match &self.database {
            Some(database) => Ok(database.clone()),
            None => Err(CpeMapperError::DatabaseFetchError {
                url: url.to_string(),
                details: "Mock network failure".to_string(),
            }
            .into()),
        }
    }
}
