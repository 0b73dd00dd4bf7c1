use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Only the binary decides exit codes; the library reports typed outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including a BOM with nothing to map
    Success = 0,
    /// Fatal error (missing file, unknown format, no ecosystem, network failure...)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal conditions of a CPE mapping run.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CpeMapperError {
    #[error("Input file not found: {path}\n\n💡 Hint: Please verify the path given to --input-file")]
    InputFileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid JSON in {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid JSON document")]
    InvalidJson { path: PathBuf, details: String },

    #[error("CPE database not found at {path}\n\n💡 Hint: Run `cpe-mapper update` or point CUSTOM_DB_OS_PATH to an existing database")]
    DatabaseNotFound { path: PathBuf },

    #[error("Impossible to retrieve the database from {url}\nDetails: {details}\n\n💡 Hint: Verify whether it is a network issue or a repository issue")]
    DatabaseFetchError { url: String, details: String },

    #[error("Unable to identify the BOM file format\n\n💡 Hint: Only CycloneDX (bomFormat) and SPDX (spdxVersion) JSON documents are supported")]
    UnknownBomFormat,

    #[error("No known ecosystems found in BOM\n\n💡 Hint: Components need a package URL such as pkg:maven/, pkg:npm/, pkg:pypi/, pkg:nuget/, pkg:cargo/, pkg:apk/ or pkg:apt/")]
    NoKnownEcosystems,

    #[error("Ecosystem detection for SPDX documents has not been implemented yet\n\n💡 Hint: Convert the BOM to CycloneDX to map it")]
    SpdxDetectionNotImplemented,

    #[error("The variable {variable} is not correctly defined: {reason}")]
    Config { variable: String, reason: String },
}
