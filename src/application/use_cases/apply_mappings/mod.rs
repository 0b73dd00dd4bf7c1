use super::update_database::sync_database;
use crate::application::dto::{ApplyOutcome, ApplyRequest, ApplyResponse, SyncOutcome};
use crate::config::{AppConfig, DatabaseSource};
use crate::cpe_mapping::domain::{BomDocument, MappingDatabase};
use crate::cpe_mapping::services::{
    EcosystemParser, ParserManager, Resolution, ResolutionSummary, ResolveOptions,
};
use crate::ports::outbound::{BomReader, BomWriter, DatabaseStore, ProgressReporter, RemoteDatabase};
use crate::shared::error::CpeMapperError;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// ApplyMappingsUseCase - Core use case for CPE mapping
///
/// Loads a BOM and the mapping database, runs the parser of every ecosystem
/// present in the BOM over it, and writes the mapped BOM.
///
/// # Type Parameters
/// * `BR` - BomReader implementation
/// * `BW` - BomWriter implementation
/// * `DS` - DatabaseStore implementation
/// * `RD` - RemoteDatabase implementation
/// * `PR` - ProgressReporter implementation
pub struct ApplyMappingsUseCase<BR, BW, DS, RD, PR> {
    bom_reader: BR,
    bom_writer: BW,
    database_store: DS,
    remote_database: RD,
    progress_reporter: PR,
    config: AppConfig,
}

impl<BR, BW, DS, RD, PR> ApplyMappingsUseCase<BR, BW, DS, RD, PR>
where
    BR: BomReader,
    BW: BomWriter,
    DS: DatabaseStore,
    RD: RemoteDatabase,
    PR: ProgressReporter,
{
    /// Creates a new ApplyMappingsUseCase with injected dependencies
    pub fn new(
        bom_reader: BR,
        bom_writer: BW,
        database_store: DS,
        remote_database: RD,
        progress_reporter: PR,
        config: AppConfig,
    ) -> Self {
        Self {
            bom_reader,
            bom_writer,
            database_store,
            remote_database,
            progress_reporter,
            config,
        }
    }

    /// Executes the mapping use case
    ///
    /// # Returns
    /// ApplyResponse describing the detected format, the ecosystems that were
    /// mapped and the per-component counters
    ///
    /// # Errors
    /// Fails without writing the output when the input or the database cannot
    /// be loaded, the format is unknown, or no known ecosystem is present.
    pub async fn execute(&self, request: ApplyRequest) -> Result<ApplyResponse> {
        if request.verbose {
            self.progress_reporter.report(&format!(
                "📖 Input file: {}",
                request.input_file.display()
            ));
            self.progress_reporter.report(&format!(
                "📝 Output file: {}",
                request.output_file.display()
            ));
            self.progress_reporter.report(&format!(
                "🗃️  CPE database: {}",
                self.config.database.local_path().display()
            ));
        }

        // Step 1: Synchronise the database if requested
        let mut database_sync = if request.update {
            Some(self.sync().await?)
        } else {
            None
        };

        // Step 2: Load the BOM
        let bom_content = self.bom_reader.read_bom(&request.input_file)?;
        let bom_value = parse_json(&bom_content, &request.input_file)?;

        // Step 3: Load the database, provisioning it when it was never downloaded
        let database = match self.load_database()? {
            Some(database) => database,
            None => {
                database_sync = Some(self.provision_database().await?);
                self.load_database()?.ok_or_else(|| CpeMapperError::DatabaseNotFound {
                    path: self.config.database.local_path().to_path_buf(),
                })?
            }
        };

        // Step 4: Detect the format
        let mut document = BomDocument::from_value(bom_value, &request.input_file)?;
        let format = document.format();
        if request.verbose {
            self.progress_reporter
                .report(&format!("🔍 Detected BOM format: {}", format));
        }

        // Step 5: Nothing to map
        if let BomDocument::CycloneDx(bom) = &document {
            if !bom.has_components() {
                tracing::warn!("No components found in BOM");
                self.progress_reporter
                    .report_completion("ℹ️  No components found in BOM, nothing to map");
                return Ok(ApplyResponse {
                    outcome: ApplyOutcome::NoComponents,
                    format,
                    ecosystems: Vec::new(),
                    database_sync,
                });
            }
        }

        // Step 6: Select and run the parsers
        let parsers = ParserManager::select_parsers(&document)?;
        let outcome =
            self.run_parsers(&parsers, &database, &mut document, request.resolve_options());

        // Step 7: Write the mapped BOM
        let output = document.to_json_pretty()?;
        self.bom_writer.write_bom(&request.output_file, &output)?;
        self.progress_reporter
            .report_completion("✅ BOM mapping has successfully finished");

        Ok(ApplyResponse {
            outcome,
            format,
            ecosystems: parsers.iter().map(EcosystemParser::ecosystem).collect(),
            database_sync,
        })
    }

    async fn sync(&self) -> Result<SyncOutcome> {
        sync_database(
            &self.remote_database,
            &self.database_store,
            &self.progress_reporter,
            &self.config.database,
        )
        .await
    }

    /// A remote database is downloaded on first use; a custom local one must exist
    async fn provision_database(&self) -> Result<SyncOutcome> {
        match &self.config.database {
            DatabaseSource::Remote { local_path, .. } => {
                self.progress_reporter.report(&format!(
                    "⬇️  No CPE database found at {}, downloading it",
                    local_path.display()
                ));
                self.sync().await
            }
            DatabaseSource::Local { path } => Err(CpeMapperError::DatabaseNotFound {
                path: path.clone(),
            }
            .into()),
        }
    }

    fn load_database(&self) -> Result<Option<MappingDatabase>> {
        let path = self.config.database.local_path();
        let Some(content) = self.database_store.read_database(path)? else {
            return Ok(None);
        };
        let database = MappingDatabase::from_json(&content).map_err(|e| {
            CpeMapperError::InvalidJson {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        tracing::debug!(ecosystems = database.len(), "CPE database loaded");
        Ok(Some(database))
    }

    fn run_parsers(
        &self,
        parsers: &[EcosystemParser],
        database: &MappingDatabase,
        document: &mut BomDocument,
        options: ResolveOptions,
    ) -> ApplyOutcome {
        let total = parsers.len();
        let mut summary = ResolutionSummary::default();

        for (index, parser) in parsers.iter().enumerate() {
            let ecosystem = parser.ecosystem().to_string();
            self.progress_reporter
                .report_progress(index, total, Some(&ecosystem));

            let resolution = match document {
                BomDocument::CycloneDx(bom) => parser.resolve_cyclonedx(database, bom, options),
                BomDocument::Spdx(doc) => parser.resolve_spdx(database, doc, options.verbose),
            };
            match resolution {
                Resolution::Resolved(pass) => summary.merge(pass),
                Resolution::NoComponents => return ApplyOutcome::NoComponents,
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&ecosystem));
        }

        ApplyOutcome::Mapped(summary)
    }
}

fn parse_json(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| {
        CpeMapperError::InvalidJson {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
