mod cli;

use cli::{Args, Command};
use cpe_mapper::prelude::*;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose());

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr: `warn` by default, `info` with `--verbose`, `RUST_LOG` wins
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::from_env()?;

    // Create adapters (Dependency Injection)
    let database_store = FileSystemDatabaseStore::new();
    let remote_database = HttpDatabaseClient::new()?;
    let progress_reporter = StderrProgressReporter::new();

    match args.command {
        Command::Apply(apply) => {
            let use_case = ApplyMappingsUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                database_store,
                remote_database,
                progress_reporter,
                config,
            );
            apply_mappings(use_case, apply.to_request()).await?;
        }
        Command::Gha => {
            let request = ApplyRequest::from_action_inputs(|name| std::env::var(name).ok())?;
            let use_case = ApplyMappingsUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                database_store,
                remote_database,
                progress_reporter,
                config,
            );
            apply_mappings(use_case, request).await?;
        }
        Command::Update => {
            let use_case = UpdateDatabaseUseCase::new(
                remote_database,
                database_store,
                progress_reporter,
                config,
            );
            use_case.execute().await?;
        }
    }

    Ok(())
}

async fn apply_mappings<BR, BW, DS, RD, PR>(
    use_case: ApplyMappingsUseCase<BR, BW, DS, RD, PR>,
    request: ApplyRequest,
) -> Result<()>
where
    BR: BomReader,
    BW: BomWriter,
    DS: DatabaseStore,
    RD: RemoteDatabase,
    PR: ProgressReporter,
{
    let response = use_case.execute(request).await?;
    if let ApplyOutcome::Mapped(summary) = response.outcome {
        tracing::info!(
            format = %response.format,
            mapped = summary.mapped,
            retained = summary.retained,
            unmatched = summary.unmatched,
            unidentified = summary.unidentified,
            "mapping summary"
        );
    }
    Ok(())
}
