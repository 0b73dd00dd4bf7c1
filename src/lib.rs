//! cpe-mapper - CPE enrichment for Software Bills of Materials
//!
//! This library adds CPE 2.3 identifiers to the components of CycloneDX
//! (and, for resolution, SPDX) JSON documents, using a curated mapping
//! database keyed by package ecosystem and component identity.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cpe_mapping`): BOM and database models, resolution services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): Environment-derived settings
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cpe_mapper::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = ApplyMappingsUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     FileSystemDatabaseStore::new(),
//!     HttpDatabaseClient::new()?,
//!     StderrProgressReporter::new(),
//!     AppConfig::from_env()?,
//! );
//!
//! let request = ApplyRequest::new("bom.json", "bom-with-cpe.json");
//! let response = use_case.execute(request).await?;
//! eprintln!("{} component(s) mapped", response.mapped_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod cpe_mapping;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDatabaseStore, FileSystemReader, FileSystemWriter,
    };
    pub use crate::adapters::outbound::network::HttpDatabaseClient;
    pub use crate::application::dto::{ApplyOutcome, ApplyRequest, ApplyResponse, SyncOutcome};
    pub use crate::application::use_cases::{ApplyMappingsUseCase, UpdateDatabaseUseCase};
    pub use crate::config::{AppConfig, DatabaseSource};
    pub use crate::cpe_mapping::domain::{
        BomDocument, BomFormat, Ecosystem, IdentityKey, MappingDatabase, MappingEntry,
    };
    pub use crate::cpe_mapping::services::{
        EcosystemParser, ParserManager, Resolution, ResolutionSummary, ResolveOptions,
    };
    pub use crate::ports::outbound::{
        BomReader, BomWriter, DatabaseStore, ProgressReporter, RemoteDatabase,
    };
    pub use crate::shared::error::{CpeMapperError, ExitCode};
    pub use crate::shared::Result;
}
