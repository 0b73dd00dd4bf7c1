use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// RemoteDatabase port for retrieving the reference CPE mapping database
#[async_trait]
pub trait RemoteDatabase {
    /// Downloads and parses the database published at `url`.
    ///
    /// Failures are not retried.
    async fn fetch_database(&self, url: &str) -> Result<Value>;
}
