use crate::cpe_mapping::services::DatabaseFingerprint;

/// Result of a database synchronisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Local and remote content hash to the same fingerprint
    UpToDate { fingerprint: DatabaseFingerprint },
    /// The local file was replaced by the remote database
    Updated {
        previous: Option<DatabaseFingerprint>,
        current: DatabaseFingerprint,
    },
    /// A user-provided local database is configured, there is nothing to compare against
    Skipped,
}

impl SyncOutcome {
    pub fn updated(&self) -> bool {
        matches!(self, SyncOutcome::Updated { .. })
    }
}
