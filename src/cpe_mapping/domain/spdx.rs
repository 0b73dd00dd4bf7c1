use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Category of the external reference written for a resolved CPE
pub const SECURITY_CATEGORY: &str = "SECURITY";

/// Reference type of the external reference written for a resolved CPE
pub const CPE23_TYPE: &str = "cpe23Type";

/// Reference type carrying a package URL
pub const PURL_TYPE: &str = "purl";

const PACKAGES: &str = "packages";
const EXTERNAL_REFS: &str = "externalRefs";
const REFERENCE_CATEGORY: &str = "referenceCategory";
const REFERENCE_TYPE: &str = "referenceType";
const REFERENCE_LOCATOR: &str = "referenceLocator";

/// An SPDX JSON document, kept as its original JSON object.
///
/// `packages` is written back at its original position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SpdxDocument {
    fields: Map<String, Value>,
    packages: Option<Vec<SpdxPackage>>,
}

impl SpdxDocument {
    pub fn packages(&self) -> &[SpdxPackage] {
        self.packages.as_deref().unwrap_or_default()
    }

    pub fn packages_mut(&mut self) -> &mut [SpdxPackage] {
        self.packages.as_deref_mut().unwrap_or_default()
    }
}

impl TryFrom<Map<String, Value>> for SpdxDocument {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let packages = match fields.get_mut(PACKAGES) {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value(value.take())
                    .map_err(|e| format!("invalid `{PACKAGES}`: {e}"))?,
            ),
        };
        Ok(Self { fields, packages })
    }
}

impl Serialize for SpdxDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            match &self.packages {
                Some(packages) if key == PACKAGES => map.serialize_entry(key, packages)?,
                _ => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

/// An SPDX package, kept as its original JSON object. SPDX has no
/// group/namespace field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SpdxPackage(Map<String, Value>);

impl SpdxPackage {
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn version_info(&self) -> Option<&str> {
        self.0.get("versionInfo").and_then(Value::as_str)
    }

    /// Entries of `externalRefs`, in document order
    pub fn external_refs(&self) -> impl Iterator<Item = &Value> {
        self.0
            .get(EXTERNAL_REFS)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }

    /// Locator of the first `purl` external reference
    pub fn purl(&self) -> Option<&str> {
        self.external_refs()
            .find(|reference| text(reference, REFERENCE_TYPE) == Some(PURL_TYPE))
            .and_then(|reference| text(reference, REFERENCE_LOCATOR))
    }

    /// Appends `reference` unless an identical (category, type, locator)
    /// tuple is already present. Returns true when it was appended.
    pub fn add_external_ref(&mut self, reference: ExternalReference) -> bool {
        if self.external_refs().any(|existing| reference.same_reference(existing)) {
            return false;
        }

        let refs = self
            .0
            .entry(EXTERNAL_REFS)
            .or_insert_with(|| Value::Array(Vec::new()));
        if refs.is_null() {
            *refs = Value::Array(Vec::new());
        }
        match refs {
            Value::Array(refs) => {
                refs.push(reference.into_value());
                true
            }
            _ => false,
        }
    }
}

impl TryFrom<Map<String, Value>> for SpdxPackage {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for field in ["name", "versionInfo"] {
            match fields.get(field) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(format!(
                        "package field `{field}` must be a string, found {other}"
                    ))
                }
            }
        }
        match fields.get(EXTERNAL_REFS) {
            None | Some(Value::Null) | Some(Value::Array(_)) => Ok(Self(fields)),
            Some(other) => Err(format!(
                "package field `{EXTERNAL_REFS}` must be a list, found {other}"
            )),
        }
    }
}

fn text<'a>(reference: &'a Value, field: &str) -> Option<&'a str> {
    reference.get(field).and_then(Value::as_str)
}

/// An entry of a package's `externalRefs` list written by the mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

impl ExternalReference {
    /// The `SECURITY` / `cpe23Type` reference for a resolved CPE
    pub fn cpe23(cpe: impl Into<String>) -> Self {
        Self {
            reference_category: SECURITY_CATEGORY.to_string(),
            reference_type: CPE23_TYPE.to_string(),
            reference_locator: cpe.into(),
        }
    }

    /// Structural equality on the (category, type, locator) tuple, ignoring comments
    pub fn same_reference(&self, existing: &Value) -> bool {
        text(existing, REFERENCE_CATEGORY) == Some(self.reference_category.as_str())
            && text(existing, REFERENCE_TYPE) == Some(self.reference_type.as_str())
            && text(existing, REFERENCE_LOCATOR) == Some(self.reference_locator.as_str())
    }

    fn into_value(self) -> Value {
        let mut entry = Map::new();
        entry.insert(REFERENCE_CATEGORY.to_string(), Value::String(self.reference_category));
        entry.insert(REFERENCE_TYPE.to_string(), Value::String(self.reference_type));
        entry.insert(REFERENCE_LOCATOR.to_string(), Value::String(self.reference_locator));
        Value::Object(entry)
    }
}
