use super::ecosystem::Ecosystem;
use super::identity::{IdentityKey, GROUP_SEPARATOR};
use serde::Deserialize;
use std::collections::HashMap;

/// A single package mapping: package identity to a CPE template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingEntry {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    /// CPE containing the `VERSION_COMPONENT` placeholder
    #[serde(rename = "cpe")]
    pub cpe_template: String,
}

impl MappingEntry {
    /// Compares this entry against a component key.
    ///
    /// Group and name must agree on both sides: a group-qualified key only
    /// matches an entry with the same group and name, and an unqualified key
    /// only matches an entry without a group (an empty group counts as none).
    fn matches(&self, key: &IdentityKey) -> bool {
        if !key.is_group_qualified() {
            return self.group.as_deref().filter(|g| !g.is_empty()).is_none()
                && self.name == key.as_str();
        }

        let Some(group) = self.group.as_deref() else {
            return false;
        };
        key.as_str()
            .strip_prefix(group)
            .and_then(|rest| rest.strip_prefix(GROUP_SEPARATOR))
            .is_some_and(|name| name == self.name)
    }
}

/// Mappings of one ecosystem, in stored order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EcosystemPartition {
    #[serde(default)]
    pub packages: Vec<MappingEntry>,
}

impl EcosystemPartition {
    /// Linear scan for the first entry matching `key`.
    ///
    /// Entries are not unique by key; the first one in stored order wins.
    pub fn find(&self, key: &IdentityKey) -> Option<&MappingEntry> {
        self.packages.iter().find(|entry| entry.matches(key))
    }
}

/// The CPE mapping database, keyed by ecosystem tag.
///
/// Loaded once per run and never mutated; a database update replaces the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MappingDatabase {
    partitions: HashMap<String, EcosystemPartition>,
}

impl MappingDatabase {
    /// Parses the JSON representation of the database
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Partition of the given ecosystem, if the database has one
    pub fn partition(&self, ecosystem: Ecosystem) -> Option<&EcosystemPartition> {
        self.partitions.get(ecosystem.tag())
    }

    /// Looks `key` up in the partition of `ecosystem`
    pub fn find(&self, ecosystem: Ecosystem, key: &IdentityKey) -> Option<&MappingEntry> {
        self.partition(ecosystem)?.find(key)
    }

    /// Total number of mappings across every partition
    pub fn len(&self) -> usize {
        self.partitions.values().map(|p| p.packages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
