//! Environment-derived configuration for cpe-mapper.
//!
//! Built once at process start and handed to the use cases; the core never
//! reads the environment itself.

use crate::shared::error::CpeMapperError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Published reference database
pub const DEFAULT_DATABASE_URL: &str =
    "https://raw.githubusercontent.com/BastienBYRA/CPE-Mapper/refs/heads/main/data/cpe-mapper.json";

pub const ENV_CUSTOM_DB_ENABLED: &str = "CUSTOM_DB_ENABLED";
pub const ENV_CUSTOM_DB_URL: &str = "CUSTOM_DB_URL";
pub const ENV_CUSTOM_DB_OS_PATH: &str = "CUSTOM_DB_OS_PATH";
pub const ENV_CUSTOM_DB_SAVE_FILE_PATH: &str = "CUSTOM_DB_SAVE_FILE_PATH";

/// GitHub Action inputs, as exposed to the action's process by the runner
pub const ENV_INPUT_INPUT_FILE: &str = "INPUT_INPUT-FILE";
pub const ENV_INPUT_OUTPUT_FILE: &str = "INPUT_OUTPUT-FILE";
pub const ENV_INPUT_OVERRIDE_CPE: &str = "INPUT_OVERRIDE-CPE";
pub const ENV_INPUT_VERBOSE: &str = "INPUT_VERBOSE";

/// Where the mapping database comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// Downloaded from `url` and cached at `local_path`
    Remote { url: String, local_path: PathBuf },
    /// A database file maintained by the user; never synchronised
    Local { path: PathBuf },
}

impl DatabaseSource {
    /// Path of the database file read by the mapper
    pub fn local_path(&self) -> &Path {
        match self {
            DatabaseSource::Remote { local_path, .. } => local_path,
            DatabaseSource::Local { path } => path,
        }
    }
}

/// Validated application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseSource,
    pub custom_db_enabled: bool,
}

impl AppConfig {
    /// Configuration using the published database and the platform data directory
    pub fn with_defaults() -> Self {
        Self {
            database: DatabaseSource::Remote {
                url: DEFAULT_DATABASE_URL.to_string(),
                local_path: default_database_path(),
            },
            custom_db_enabled: false,
        }
    }

    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Empty variables are treated as unset. Custom locations are validated even
    /// when `CUSTOM_DB_ENABLED` is false, but only used when it is true.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let custom_db_enabled = match read(ENV_CUSTOM_DB_ENABLED) {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                config_error(
                    ENV_CUSTOM_DB_ENABLED,
                    "expected values: true, false, True, False",
                )
            })?,
            None => false,
        };

        let custom_url = read(ENV_CUSTOM_DB_URL);
        if let Some(value) = custom_url.as_deref() {
            validate_url(value)
                .map_err(|reason| config_error(ENV_CUSTOM_DB_URL, &reason))?;
        }

        let custom_path = read(ENV_CUSTOM_DB_OS_PATH).map(PathBuf::from);
        if let Some(path) = custom_path.as_deref() {
            if !path.is_file() {
                return Err(config_error(
                    ENV_CUSTOM_DB_OS_PATH,
                    &format!("{} is not an existing file", path.display()),
                ));
            }
        }

        if custom_url.is_some() && custom_path.is_some() {
            return Err(config_error(
                ENV_CUSTOM_DB_URL,
                "a URL (CUSTOM_DB_URL) and a path (CUSTOM_DB_OS_PATH) have been provided, \
                 please specify a single location for the database",
            ));
        }

        let save_path = read(ENV_CUSTOM_DB_SAVE_FILE_PATH).map(PathBuf::from);
        if let Some(path) = save_path.as_deref() {
            validate_save_path(path)
                .map_err(|reason| config_error(ENV_CUSTOM_DB_SAVE_FILE_PATH, &reason))?;
        }

        let mut config = Self::with_defaults();
        config.custom_db_enabled = custom_db_enabled;
        if !custom_db_enabled {
            return Ok(config);
        }

        config.database = match custom_path {
            Some(path) => DatabaseSource::Local { path },
            None => DatabaseSource::Remote {
                url: custom_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                local_path: save_path.unwrap_or_else(default_database_path),
            },
        };
        Ok(config)
    }
}

/// `<data dir>/cpe-mapper/data/cpe-mapper.json`, relative to the working
/// directory when the platform has no data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cpe-mapper")
        .join("data")
        .join("cpe-mapper.json")
}

pub(crate) fn config_error(variable: &str, reason: &str) -> anyhow::Error {
    CpeMapperError::Config {
        variable: variable.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" => Some(true),
        "false" | "False" => Some(false),
        _ => None,
    }
}

fn validate_url(value: &str) -> std::result::Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{}: {}", value, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "unsupported scheme '{}', the value should start with http:// or https://",
            scheme
        )),
    }
}

fn validate_save_path(path: &Path) -> std::result::Result<(), String> {
    if path.is_dir() {
        return Err(format!("{} is a directory", path.display()));
    }
    match path.parent() {
        Some(parent) if parent != Path::new("") && !parent.is_dir() => Err(format!(
            "parent directory {} does not exist",
            parent.display()
        )),
        _ => Ok(()),
    }
}
