use super::cyclonedx::{CycloneDxBom, CYCLONEDX_BOM_FORMAT};
use super::spdx::SpdxDocument;
use crate::shared::error::CpeMapperError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// SBOM formats the mapper understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomFormat {
    CycloneDx,
    Spdx,
}

impl BomFormat {
    /// Guesses the format of a parsed JSON document.
    ///
    /// CycloneDX is recognised by `bomFormat == "CycloneDX"`, SPDX by the
    /// presence of `spdxVersion`.
    pub fn detect(document: &Value) -> Option<Self> {
        if document.get("bomFormat").and_then(Value::as_str) == Some(CYCLONEDX_BOM_FORMAT) {
            return Some(BomFormat::CycloneDx);
        }

        match document.get("spdxVersion") {
            Some(Value::Null) | None => None,
            Some(Value::String(version)) if version.is_empty() => None,
            Some(_) => Some(BomFormat::Spdx),
        }
    }
}

impl fmt::Display for BomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BomFormat::CycloneDx => f.write_str("CycloneDX"),
            BomFormat::Spdx => f.write_str("SPDX"),
        }
    }
}

/// A BOM loaded in memory, owned by the run and mutated in place
#[derive(Debug, Clone, PartialEq)]
pub enum BomDocument {
    CycloneDx(CycloneDxBom),
    Spdx(SpdxDocument),
}

impl BomDocument {
    /// Detects the format of `document`, read from `source`, and deserializes
    /// it into the matching model
    ///
    /// # Errors
    /// - [`CpeMapperError::UnknownBomFormat`] when neither format is recognised
    /// - [`CpeMapperError::InvalidJson`] when the document does not fit the detected format
    pub fn from_value(document: Value, source: &Path) -> Result<Self> {
        match BomFormat::detect(&document) {
            Some(BomFormat::CycloneDx) => Ok(BomDocument::CycloneDx(deserialize(document, source)?)),
            Some(BomFormat::Spdx) => Ok(BomDocument::Spdx(deserialize(document, source)?)),
            None => Err(CpeMapperError::UnknownBomFormat.into()),
        }
    }

    pub fn format(&self) -> BomFormat {
        match self {
            BomDocument::CycloneDx(_) => BomFormat::CycloneDx,
            BomDocument::Spdx(_) => BomFormat::Spdx,
        }
    }

    /// Pretty-printed JSON (2-space indentation) as written to the output file
    pub fn to_json_pretty(&self) -> Result<String> {
        let json = match self {
            BomDocument::CycloneDx(bom) => serde_json::to_string_pretty(bom)?,
            BomDocument::Spdx(doc) => serde_json::to_string_pretty(doc)?,
        };
        Ok(json)
    }
}

fn deserialize<T: DeserializeOwned>(document: Value, source: &Path) -> Result<T> {
    serde_json::from_value(document).map_err(|e| {
        CpeMapperError::InvalidJson {
            path: source.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
