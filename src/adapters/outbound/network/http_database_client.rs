use crate::ports::outbound::RemoteDatabase;
use crate::shared::error::CpeMapperError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HttpDatabaseClient adapter for downloading the published CPE mapping database
///
/// A single GET request, no retry: a failed download is fatal for the run.
pub struct HttpDatabaseClient {
    client: reqwest::Client,
}

impl HttpDatabaseClient {
    /// Creates a new client with a 10 second timeout
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cpe-mapper/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    async fn download(&self, url: &str) -> std::result::Result<Value, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("server returned status code {}", response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("invalid JSON: {}", e))
    }
}

// Note: no Default implementation, client creation can fail.

#[async_trait]
impl RemoteDatabase for HttpDatabaseClient {
    async fn fetch_database(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "Fetching remote CPE database");
        self.download(url).await.map_err(|details| {
            CpeMapperError::DatabaseFetchError {
                url: url.to_string(),
                details,
            }
            .into()
        })
    }
}
