use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Value of `bomFormat` identifying a CycloneDX document
pub const CYCLONEDX_BOM_FORMAT: &str = "CycloneDX";

const COMPONENTS: &str = "components";
const CPE: &str = "cpe";

/// Component fields the mapper reads, which must be strings when present
const TEXT_FIELDS: [&str; 5] = ["name", "group", "version", "purl", CPE];

/// A CycloneDX JSON document.
///
/// The document is kept as its original JSON object. `components` is the only
/// member parsed into typed values, and it is written back at the position it
/// had in the input, so the output keeps every key in its original order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CycloneDxBom {
    fields: Map<String, Value>,
    components: Option<Vec<CycloneDxComponent>>,
}

impl CycloneDxBom {
    /// Components of the BOM, empty when the document declares none
    pub fn components(&self) -> &[CycloneDxComponent] {
        self.components.as_deref().unwrap_or_default()
    }

    pub fn components_mut(&mut self) -> &mut [CycloneDxComponent] {
        self.components.as_deref_mut().unwrap_or_default()
    }

    pub fn has_components(&self) -> bool {
        !self.components().is_empty()
    }
}

impl TryFrom<Map<String, Value>> for CycloneDxBom {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        // The slot stays in `fields` so serialization knows where it goes
        let components = match fields.get_mut(COMPONENTS) {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value(value.take())
                    .map_err(|e| format!("invalid `{COMPONENTS}`: {e}"))?,
            ),
        };
        Ok(Self { fields, components })
    }
}

impl Serialize for CycloneDxBom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            match &self.components {
                Some(components) if key == COMPONENTS => map.serialize_entry(key, components)?,
                _ => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

/// A CycloneDX component, kept as its original JSON object.
///
/// `cpe` is the single field the mapper writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CycloneDxComponent(Map<String, Value>);

impl CycloneDxComponent {
    fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn group(&self) -> Option<&str> {
        self.text("group")
    }

    pub fn version(&self) -> Option<&str> {
        self.text("version")
    }

    pub fn purl(&self) -> Option<&str> {
        self.text("purl")
    }

    pub fn cpe(&self) -> Option<&str> {
        self.text(CPE)
    }

    /// True when the component already carries a non-empty CPE
    pub fn has_cpe(&self) -> bool {
        self.cpe().is_some_and(|cpe| !cpe.is_empty())
    }

    /// Writes `cpe` in place when the key exists, otherwise appends it
    pub fn set_cpe(&mut self, cpe: String) {
        self.0.insert(CPE.to_string(), Value::String(cpe));
    }
}

impl TryFrom<Map<String, Value>> for CycloneDxComponent {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for field in TEXT_FIELDS {
            match fields.get(field) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(format!(
                        "component field `{field}` must be a string, found {other}"
                    ))
                }
            }
        }
        Ok(Self(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(value: Value) -> CycloneDxComponent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let input = json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.6",
            "serialNumber": "urn:uuid:3e671687-395b-41f5-a30f-a58921a69b79",
            "components": [{
                "type": "library",
                "bom-ref": "pkg:npm/express@4.18.2",
                "name": "express",
                "version": "4.18.2",
                "purl": "pkg:npm/express@4.18.2",
                "licenses": [{ "license": { "id": "MIT" } }]
            }],
            "dependencies": []
        });

        let bom: CycloneDxBom = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(bom.components().len(), 1);
        assert_eq!(bom.components()[0].name(), Some("express"));
        assert_eq!(serde_json::to_value(&bom).unwrap(), input);
    }

    #[test]
    fn test_key_order_survives_round_trip() {
        let input = r#"{
  "bomFormat": "CycloneDX",
  "components": [
    {
      "type": "library",
      "bom-ref": "pkg:apk/alpine/openssl@3.2.0-r0",
      "name": "openssl",
      "cpe": null,
      "purl": "pkg:apk/alpine/openssl@3.2.0-r0"
    }
  ],
  "dependencies": []
}"#;

        let bom: CycloneDxBom = serde_json::from_str(input).unwrap();
        assert_eq!(serde_json::to_string_pretty(&bom).unwrap(), input);
    }

    #[test]
    fn test_set_cpe_keeps_key_position() {
        let mut bom: CycloneDxBom = serde_json::from_value(json!({
            "bomFormat": "CycloneDX",
            "components": [{ "type": "library", "cpe": null, "name": "openssl" }],
            "dependencies": []
        }))
        .unwrap();

        bom.components_mut()[0].set_cpe("cpe:2.3:a:openssl:openssl".to_string());

        let written = serde_json::to_string(&bom).unwrap();
        assert_eq!(
            written,
            r#"{"bomFormat":"CycloneDX","components":[{"type":"library","cpe":"cpe:2.3:a:openssl:openssl","name":"openssl"}],"dependencies":[]}"#
        );
    }

    #[test]
    fn test_set_cpe_appends_missing_key() {
        let mut openssl = component(json!({ "name": "openssl", "purl": "pkg:apk/alpine/openssl" }));
        openssl.set_cpe("cpe:x".to_string());
        assert_eq!(
            serde_json::to_string(&openssl).unwrap(),
            r#"{"name":"openssl","purl":"pkg:apk/alpine/openssl","cpe":"cpe:x"}"#
        );
    }

    #[test]
    fn test_missing_components() {
        let bom: CycloneDxBom =
            serde_json::from_value(json!({ "bomFormat": "CycloneDX" })).unwrap();
        assert!(!bom.has_components());
        assert!(bom.components().is_empty());
        assert_eq!(
            serde_json::to_value(&bom).unwrap(),
            json!({ "bomFormat": "CycloneDX" })
        );
    }

    #[test]
    fn test_null_components_are_kept() {
        let input = json!({ "bomFormat": "CycloneDX", "components": null });
        let bom: CycloneDxBom = serde_json::from_value(input.clone()).unwrap();
        assert!(!bom.has_components());
        assert_eq!(serde_json::to_value(&bom).unwrap(), input);
    }

    #[test]
    fn test_non_string_version_is_rejected() {
        let result = serde_json::from_value::<CycloneDxBom>(json!({
            "bomFormat": "CycloneDX",
            "components": [{ "name": "openssl", "version": 1 }]
        }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("`version` must be a string"));
    }

    #[test]
    fn test_empty_cpe_is_not_a_cpe() {
        assert!(!component(json!({ "name": "openssl", "cpe": "" })).has_cpe());
        assert!(!component(json!({ "name": "openssl", "cpe": null })).has_cpe());
        assert!(component(json!({ "cpe": "cpe:x" })).has_cpe());
    }
}
