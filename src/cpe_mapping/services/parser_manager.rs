use super::ecosystem_parser::EcosystemParser;
use crate::cpe_mapping::domain::{BomDocument, CycloneDxBom, Ecosystem, SpdxDocument};
use crate::shared::error::CpeMapperError;
use crate::shared::Result;

/// Selects the ecosystem parsers relevant to a BOM.
///
/// Detection looks at the package URLs declared in the document, so ecosystems
/// that do not appear are never run over it.
pub struct ParserManager;

impl ParserManager {
    /// Returns one parser per ecosystem present in `document`, in [`Ecosystem::ALL`] order.
    ///
    /// # Errors
    /// - [`CpeMapperError::NoKnownEcosystems`] when no component has a recognised package URL
    /// - [`CpeMapperError::SpdxDetectionNotImplemented`] for SPDX documents
    pub fn select_parsers(document: &BomDocument) -> Result<Vec<EcosystemParser>> {
        let parsers = match document {
            BomDocument::CycloneDx(bom) => Self::select_for_cyclonedx(bom),
            BomDocument::Spdx(doc) => Self::select_for_spdx(doc)?,
        };

        if parsers.is_empty() {
            return Err(CpeMapperError::NoKnownEcosystems.into());
        }
        Ok(parsers)
    }

    /// An ecosystem is selected as soon as one component's `purl` carries its prefix
    pub fn select_for_cyclonedx(bom: &CycloneDxBom) -> Vec<EcosystemParser> {
        Ecosystem::ALL
            .into_iter()
            .filter(|ecosystem| {
                bom.components().iter().any(|component| {
                    component
                        .purl()
                        .is_some_and(|purl| ecosystem.owns_purl(purl))
                })
            })
            .map(EcosystemParser::new)
            .collect()
    }

    // TODO: detect ecosystems from the `purl` externalRefs of SPDX packages
    pub fn select_for_spdx(_document: &SpdxDocument) -> Result<Vec<EcosystemParser>> {
        Err(CpeMapperError::SpdxDetectionNotImplemented.into())
    }
}
