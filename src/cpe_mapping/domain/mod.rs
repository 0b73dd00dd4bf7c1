pub mod bom_document;
pub mod cpe_template;
pub mod cyclonedx;
pub mod ecosystem;
pub mod identity;
pub mod mapping_database;
pub mod spdx;

pub use bom_document::{BomDocument, BomFormat};
pub use cyclonedx::{CycloneDxBom, CycloneDxComponent};
pub use ecosystem::Ecosystem;
pub use identity::IdentityKey;
pub use mapping_database::{EcosystemPartition, MappingDatabase, MappingEntry};
pub use spdx::{ExternalReference, SpdxDocument, SpdxPackage};
