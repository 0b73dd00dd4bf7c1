use crate::shared::Result;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 of a mapping database in canonical (compact) JSON form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseFingerprint(String);

impl DatabaseFingerprint {
    fn of_json(json: &str) -> Self {
        Self(hex::encode(Sha256::digest(json.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the local database compares with the remote one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Same content, nothing to write
    UpToDate,
    /// Content differs, the local file must be replaced
    Stale,
    /// No usable local database, the remote copy must be written
    Missing,
}

impl Freshness {
    pub fn needs_update(self) -> bool {
        !matches!(self, Freshness::UpToDate)
    }
}

/// Content-hash comparison between the local and the remote mapping database.
///
/// The local file is stored pretty-printed while the remote one is compact,
/// so the local content is parsed and re-serialized compactly before hashing.
pub struct DatabaseSync;

impl DatabaseSync {
    /// Fingerprint of the local database file content.
    ///
    /// Returns `None` when there is no file or when it is not valid JSON;
    /// either way the local copy will be replaced.
    pub fn fingerprint_local(content: Option<&str>) -> Option<DatabaseFingerprint> {
        let content = content?;
        let parsed: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Local database is not valid JSON, it will be replaced");
                return None;
            }
        };
        serde_json::to_string(&parsed)
            .ok()
            .map(|canonical| DatabaseFingerprint::of_json(&canonical))
    }

    /// Fingerprint of the freshly retrieved remote database
    pub fn fingerprint_remote(remote: &Value) -> Result<DatabaseFingerprint> {
        let canonical = serde_json::to_string(remote)?;
        Ok(DatabaseFingerprint::of_json(&canonical))
    }

    pub fn assess(
        local: Option<&DatabaseFingerprint>,
        remote: &DatabaseFingerprint,
    ) -> Freshness {
        match local {
            None => Freshness::Missing,
            Some(local) if local == remote => Freshness::UpToDate,
            Some(_) => Freshness::Stale,
        }
    }
}
