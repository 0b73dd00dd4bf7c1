use crate::cpe_mapping::domain::cpe_template;
use crate::cpe_mapping::domain::{
    CycloneDxBom, CycloneDxComponent, Ecosystem, ExternalReference, IdentityKey,
    MappingDatabase, MappingEntry, SpdxDocument, SpdxPackage,
};
use tracing::{info, warn};

/// Caller choices for a resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Replace a CPE already present on a CycloneDX component
    pub override_existing: bool,
    /// Log every mapping and every miss
    pub verbose: bool,
}

/// Per-pass counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Components that received a CPE
    pub mapped: usize,
    /// Components with a match whose existing CPE was kept
    pub retained: usize,
    /// Components without a database entry
    pub unmatched: usize,
    /// Components with neither name nor group
    pub unidentified: usize,
}

impl ResolutionSummary {
    pub fn merge(&mut self, other: ResolutionSummary) {
        self.mapped += other.mapped;
        self.retained += other.retained;
        self.unmatched += other.unmatched;
        self.unidentified += other.unidentified;
    }
}

/// Result of running one parser over a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The document declares no components: nothing to do, not an error
    NoComponents,
    Resolved(ResolutionSummary),
}

/// Outcome of applying one database entry to one component
enum Applied {
    Written,
    Kept,
}

/// Resolves CPEs for the components of a single ecosystem.
///
/// All ecosystems share the same algorithm; the ecosystem only selects the
/// database partition and which components (by package URL) the parser visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EcosystemParser {
    ecosystem: Ecosystem,
}

impl EcosystemParser {
    pub fn new(ecosystem: Ecosystem) -> Self {
        Self { ecosystem }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Looks `key` up in this parser's partition of the database
    pub fn search_mapping<'db>(
        &self,
        key: &IdentityKey,
        database: &'db MappingDatabase,
    ) -> Option<&'db MappingEntry> {
        database.find(self.ecosystem, key)
    }

    /// Only components whose package URL belongs to this ecosystem are visited,
    /// so two parsers never write the same component
    fn handles(&self, purl: Option<&str>) -> bool {
        purl.is_some_and(|purl| self.ecosystem.owns_purl(purl))
    }

    /// Maps the components of a CycloneDX BOM in place.
    ///
    /// An existing CPE is only replaced when `options.override_existing` is set.
    pub fn resolve_cyclonedx(
        &self,
        database: &MappingDatabase,
        bom: &mut CycloneDxBom,
        options: ResolveOptions,
    ) -> Resolution {
        if !bom.has_components() {
            warn!("No components found in BOM");
            return Resolution::NoComponents;
        }

        let mut summary = ResolutionSummary::default();
        for component in bom
            .components_mut()
            .iter_mut()
            .filter(|component| self.handles(component.purl()))
        {
            let Some(key) =
                IdentityKey::normalize(component.group(), component.name())
            else {
                warn!(ecosystem = %self.ecosystem, "No name nor group found for a component");
                summary.unidentified += 1;
                continue;
            };

            match self.search_mapping(&key, database) {
                Some(entry) => match Self::set_cpe_cyclonedx(entry, &key, component, options) {
                    Applied::Written => summary.mapped += 1,
                    Applied::Kept => summary.retained += 1,
                },
                None => {
                    if options.verbose {
                        info!("No mapping found for {}", key);
                    }
                    summary.unmatched += 1;
                }
            }
        }

        Resolution::Resolved(summary)
    }

    fn set_cpe_cyclonedx(
        entry: &MappingEntry,
        key: &IdentityKey,
        component: &mut CycloneDxComponent,
        options: ResolveOptions,
    ) -> Applied {
        if component.has_cpe() && !options.override_existing {
            return Applied::Kept;
        }

        let cpe = cpe_template::instantiate(&entry.cpe_template, component.version());
        if options.verbose {
            info!("Mapped {} -> {}", key, cpe);
        }
        component.set_cpe(cpe);
        Applied::Written
    }

    /// Maps the packages of an SPDX document in place.
    ///
    /// SPDX packages have no group, so the key is always the bare name and
    /// group-qualified entries (Maven) cannot match. References are only ever
    /// appended, never replaced or removed.
    pub fn resolve_spdx(
        &self,
        database: &MappingDatabase,
        document: &mut SpdxDocument,
        verbose: bool,
    ) -> Resolution {
        if document.packages().is_empty() {
            warn!("No packages found in SPDX document");
            return Resolution::NoComponents;
        }

        let mut summary = ResolutionSummary::default();
        for package in document
            .packages_mut()
            .iter_mut()
            .filter(|package| self.handles(package.purl()))
        {
            let Some(key) = IdentityKey::normalize(None, package.name()) else {
                warn!(ecosystem = %self.ecosystem, "No name found for an SPDX package");
                summary.unidentified += 1;
                continue;
            };

            match self.search_mapping(&key, database) {
                Some(entry) => match Self::set_cpe_spdx(entry, &key, package, verbose) {
                    Applied::Written => summary.mapped += 1,
                    Applied::Kept => summary.retained += 1,
                },
                None => {
                    if verbose {
                        info!("No mapping found for {}", key);
                    }
                    summary.unmatched += 1;
                }
            }
        }

        Resolution::Resolved(summary)
    }

    fn set_cpe_spdx(
        entry: &MappingEntry,
        key: &IdentityKey,
        package: &mut SpdxPackage,
        verbose: bool,
    ) -> Applied {
        let cpe = cpe_template::instantiate(&entry.cpe_template, package.version_info());
        if verbose {
            info!("Mapped {} -> {}", key, cpe);
        }

        if package.add_external_ref(ExternalReference::cpe23(cpe)) {
            Applied::Written
        } else {
            Applied::Kept
        }
    }
}
