use super::SyncOutcome;
use crate::cpe_mapping::domain::{BomFormat, Ecosystem};
use crate::cpe_mapping::services::ResolutionSummary;

/// What an apply run did with the BOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Parsers ran and the mapped BOM was written
    Mapped(ResolutionSummary),
    /// The BOM declares no components; nothing was written
    NoComponents,
}

/// ApplyResponse - Response DTO from the CPE mapping use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResponse {
    pub outcome: ApplyOutcome,
    pub format: BomFormat,
    /// Ecosystems whose parser ran, empty for [`ApplyOutcome::NoComponents`]
    pub ecosystems: Vec<Ecosystem>,
    /// Present when the run synchronised the database first
    pub database_sync: Option<SyncOutcome>,
}

impl ApplyResponse {
    /// Number of components that received a CPE
    pub fn mapped_count(&self) -> usize {
        match self.outcome {
            ApplyOutcome::Mapped(summary) => summary.mapped,
            ApplyOutcome::NoComponents => 0,
        }
    }
}
