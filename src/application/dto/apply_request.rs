use crate::config::{
    config_error, parse_bool, ENV_INPUT_INPUT_FILE, ENV_INPUT_OUTPUT_FILE,
    ENV_INPUT_OVERRIDE_CPE, ENV_INPUT_VERBOSE,
};
use crate::cpe_mapping::services::ResolveOptions;
use crate::shared::Result;
use std::path::PathBuf;

/// ApplyRequest - Request DTO for the CPE mapping use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    /// BOM to map
    pub input_file: PathBuf,
    /// Where the mapped BOM is written
    pub output_file: PathBuf,
    /// Synchronise the mapping database before mapping
    pub update: bool,
    /// Log every mapping and every miss
    pub verbose: bool,
    /// Replace CPEs already present in the BOM (CycloneDX only)
    pub override_cpe: bool,
}

impl ApplyRequest {
    /// Request with database update enabled, quiet, keeping existing CPEs
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            update: true,
            verbose: false,
            override_cpe: false,
        }
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_override_cpe(mut self, override_cpe: bool) -> Self {
        self.override_cpe = override_cpe;
        self
    }

    /// Builds the request of a GitHub Action run from the action inputs
    /// (`INPUT_INPUT-FILE`, `INPUT_OUTPUT-FILE`, `INPUT_OVERRIDE-CPE`, `INPUT_VERBOSE`).
    ///
    /// The database is always updated. Boolean inputs accept `true`, `false`,
    /// `True`, `False` or an empty value, which means false.
    pub fn from_action_inputs<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| config_error(name, "the input is required"))
        };
        let flag = |name: &str| match lookup(name).filter(|value| !value.is_empty()) {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                config_error(
                    name,
                    "expected values: true, false, True, False or an empty value",
                )
            }),
            None => Ok(false),
        };

        let override_cpe = flag(ENV_INPUT_OVERRIDE_CPE)?;
        let verbose = flag(ENV_INPUT_VERBOSE)?;
        Ok(Self::new(required(ENV_INPUT_INPUT_FILE)?, required(ENV_INPUT_OUTPUT_FILE)?)
            .with_verbose(verbose)
            .with_override_cpe(override_cpe))
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            override_existing: self.override_cpe,
            verbose: self.verbose,
        }
    }
}
