use clap::{Args as ClapArgs, Parser, Subcommand};
use cpe_mapper::application::dto::ApplyRequest;
use cpe_mapper::config::ENV_INPUT_VERBOSE;
use std::path::PathBuf;

/// Add CPE identifiers to the components of a CycloneDX or SPDX SBOM
#[derive(Parser, Debug)]
#[command(name = "cpe-mapper")]
#[command(version)]
#[command(about = "Add CPE identifiers to the components of a CycloneDX or SPDX SBOM", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Map the components of a BOM to CPEs and write the result
    Apply(ApplyArgs),
    /// Download the CPE database if it changed since the last update
    Update,
    /// Run `apply` from the inputs of a GitHub Action (INPUT_* variables)
    Gha,
}

#[derive(ClapArgs, Debug)]
pub struct ApplyArgs {
    /// BOM to read
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// File the mapped BOM is written to
    #[arg(short, long, value_name = "FILE")]
    pub output_file: PathBuf,

    /// Update the CPE database before mapping (default)
    #[arg(long, overrides_with = "no_update")]
    pub update: bool,

    /// Map with the local CPE database as-is
    #[arg(long, overrides_with = "update")]
    pub no_update: bool,

    /// Log every mapping and every component without a match
    #[arg(short, long)]
    pub verbose: bool,

    /// Replace CPEs already present in the BOM
    #[arg(long)]
    pub override_cpe: bool,
}

impl ApplyArgs {
    /// Later flags win, and updating stays on unless `--no-update` is the last one
    pub fn update_enabled(&self) -> bool {
        !self.no_update
    }

    pub fn to_request(&self) -> ApplyRequest {
        ApplyRequest::new(&self.input_file, &self.output_file)
            .with_update(self.update_enabled())
            .with_verbose(self.verbose)
            .with_override_cpe(self.override_cpe)
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbose(&self) -> bool {
        self.verbose_with(|name| std::env::var(name).ok())
    }

    /// The `gha` subcommand takes its verbosity from the `verbose` action input
    fn verbose_with<F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        match &self.command {
            Command::Apply(apply) => apply.verbose,
            Command::Update => false,
            Command::Gha => matches!(lookup(ENV_INPUT_VERBOSE).as_deref(), Some("true" | "True")),
        }
    }
}
