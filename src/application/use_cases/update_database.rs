use crate::application::dto::SyncOutcome;
use crate::config::{AppConfig, DatabaseSource};
use crate::cpe_mapping::services::{DatabaseSync, Freshness};
use crate::ports::outbound::{DatabaseStore, ProgressReporter, RemoteDatabase};
use crate::shared::Result;

/// UpdateDatabaseUseCase - Keeps the local CPE mapping database current
///
/// Compares content hashes of the local and remote databases and replaces
/// the local file as a whole when they differ. Local edits are not merged.
///
/// # Type Parameters
/// * `RD` - RemoteDatabase implementation
/// * `DS` - DatabaseStore implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateDatabaseUseCase<RD, DS, PR> {
    remote_database: RD,
    database_store: DS,
    progress_reporter: PR,
    config: AppConfig,
}

impl<RD, DS, PR> UpdateDatabaseUseCase<RD, DS, PR>
where
    RD: RemoteDatabase,
    DS: DatabaseStore,
    PR: ProgressReporter,
{
    /// Creates a new UpdateDatabaseUseCase with injected dependencies
    pub fn new(remote_database: RD, database_store: DS, progress_reporter: PR, config: AppConfig) -> Self {
        Self {
            remote_database,
            database_store,
            progress_reporter,
            config,
        }
    }

    pub async fn execute(&self) -> Result<SyncOutcome> {
        sync_database(
            &self.remote_database,
            &self.database_store,
            &self.progress_reporter,
            &self.config.database,
        )
        .await
    }
}

/// Synchronises the database described by `source`.
///
/// Shared with the apply use case, which syncs before mapping and
/// provisions a missing database.
pub(crate) async fn sync_database<RD, DS, PR>(
    remote_database: &RD,
    database_store: &DS,
    progress_reporter: &PR,
    source: &DatabaseSource,
) -> Result<SyncOutcome>
where
    RD: RemoteDatabase,
    DS: DatabaseStore,
    PR: ProgressReporter,
{
    let (url, local_path) = match source {
        DatabaseSource::Remote { url, local_path } => (url, local_path),
        DatabaseSource::Local { path } => {
            progress_reporter.report(&format!(
                "ℹ️  Using the custom database {}, skipping update",
                path.display()
            ));
            return Ok(SyncOutcome::Skipped);
        }
    };

    progress_reporter.report(&format!("🔄 Checking CPE database for updates: {}", url));
    let remote = remote_database.fetch_database(url).await?;

    let local_content = database_store.read_database(local_path)?;
    if local_content.is_none() {
        progress_reporter.report_error(
            "⚠️  Impossible to find the local database file, a new one will be created",
        );
    }

    let local = DatabaseSync::fingerprint_local(local_content.as_deref());
    let current = DatabaseSync::fingerprint_remote(&remote)?;

    match DatabaseSync::assess(local.as_ref(), &current) {
        Freshness::UpToDate => {
            progress_reporter.report_completion("✅ The database is already up-to-date!");
            Ok(SyncOutcome::UpToDate {
                fingerprint: current,
            })
        }
        Freshness::Stale | Freshness::Missing => {
            let pretty = serde_json::to_string_pretty(&remote)?;
            database_store.write_database(local_path, &pretty)?;
            tracing::debug!(path = %local_path.display(), fingerprint = %current, "CPE database replaced");
            progress_reporter.report_completion("✅ CPE database updated successfully");
            Ok(SyncOutcome::Updated {
                previous: local,
                current,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_doubles::{
        InMemoryFiles, MockRemoteDatabase, RecordingReporter,
    };
    use crate::shared::error::CpeMapperError;
    use serde_json::json;
    use std::path::PathBuf;

    const DB_PATH: &str = "/data/cpe-mapper/data/cpe-mapper.json";

    fn remote_config() -> AppConfig {
        AppConfig {
            database: DatabaseSource::Remote {
                url: "https://example.com/cpe-mapper.json".to_string(),
                local_path: PathBuf::from(DB_PATH),
            },
            custom_db_enabled: false,
        }
    }

    fn remote_database() -> serde_json::Value {
        json!({
            "apk": { "packages": [
                { "name": "openssl", "cpe": "cpe:2.3:a:openssl:openssl:VERSION_COMPONENT" }
            ] }
        })
    }

    #[tokio::test]
    async fn test_missing_local_database_is_provisioned() {
        let files = InMemoryFiles::new();
        let reporter = RecordingReporter::new();
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::serving(remote_database()),
            files.clone(),
            reporter.clone(),
            remote_config(),
        );

        let outcome = use_case.execute().await.unwrap();

        assert!(outcome.updated());
        assert!(matches!(outcome, SyncOutcome::Updated { previous: None, .. }));
        let written = files.get(DB_PATH).unwrap();
        assert_eq!(written, serde_json::to_string_pretty(&remote_database()).unwrap());
        assert!(reporter.contains("a new one will be created"));
        assert!(reporter.contains("CPE database updated successfully"));
    }

    #[tokio::test]
    async fn test_pretty_local_copy_of_same_content_is_up_to_date() {
        let pretty = serde_json::to_string_pretty(&remote_database()).unwrap();
        let files = InMemoryFiles::new().with_file(DB_PATH, pretty);
        let reporter = RecordingReporter::new();
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::serving(remote_database()),
            files.clone(),
            reporter.clone(),
            remote_config(),
        );

        let outcome = use_case.execute().await.unwrap();

        assert!(!outcome.updated());
        assert_eq!(files.write_count(), 0);
        assert!(reporter.contains("already up-to-date"));
    }

    #[tokio::test]
    async fn test_stale_local_database_is_replaced_wholesale() {
        let local = json!({
            "npm": { "packages": [{ "name": "local-only", "cpe": "cpe:local" }] }
        });
        let files = InMemoryFiles::new().with_file(DB_PATH, local.to_string());
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::serving(remote_database()),
            files.clone(),
            RecordingReporter::new(),
            remote_config(),
        );

        let outcome = use_case.execute().await.unwrap();

        assert!(matches!(outcome, SyncOutcome::Updated { previous: Some(_), .. }));
        let written: serde_json::Value = serde_json::from_str(&files.get(DB_PATH).unwrap()).unwrap();
        assert_eq!(written, remote_database());
        assert!(!files.get(DB_PATH).unwrap().contains("local-only"));
    }

    #[tokio::test]
    async fn test_invalid_local_json_is_replaced() {
        let files = InMemoryFiles::new().with_file(DB_PATH, "{ broken");
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::serving(remote_database()),
            files.clone(),
            RecordingReporter::new(),
            remote_config(),
        );

        assert!(use_case.execute().await.unwrap().updated());
    }

    #[tokio::test]
    async fn test_two_consecutive_syncs_are_idempotent() {
        let files = InMemoryFiles::new();
        let reporter = RecordingReporter::new();
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::serving(remote_database()),
            files.clone(),
            reporter.clone(),
            remote_config(),
        );

        use_case.execute().await.unwrap();
        let after_first = files.get(DB_PATH).unwrap();

        let second = use_case.execute().await.unwrap();
        let third = use_case.execute().await.unwrap();

        assert!(!second.updated());
        assert_eq!(second, third);
        assert_eq!(files.get(DB_PATH).unwrap(), after_first);
        assert_eq!(files.write_count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_fatal_and_keeps_local() {
        let files = InMemoryFiles::new().with_file(DB_PATH, "{}");
        let use_case = UpdateDatabaseUseCase::new(
            MockRemoteDatabase::unreachable(),
            files.clone(),
            RecordingReporter::new(),
            remote_config(),
        );

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CpeMapperError>(),
            Some(CpeMapperError::DatabaseFetchError { .. })
        ));
        assert_eq!(files.get(DB_PATH).as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_local_source_is_skipped() {
        let remote = MockRemoteDatabase::serving(remote_database());
        let config = AppConfig {
            database: DatabaseSource::Local {
                path: PathBuf::from("/custom/db.json"),
            },
            custom_db_enabled: true,
        };
        let use_case = UpdateDatabaseUseCase::new(
            remote.clone(),
            InMemoryFiles::new(),
            RecordingReporter::new(),
            config,
        );

        assert_eq!(use_case.execute().await.unwrap(), SyncOutcome::Skipped);
        assert_eq!(remote.fetch_count(), 0);
    }
}
