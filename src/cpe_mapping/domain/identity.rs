use std::fmt;

/// Separator between a component's group and name in an [`IdentityKey`]
pub const GROUP_SEPARATOR: char = ':';

/// Canonical lookup key joining a BOM component to a mapping database entry.
///
/// Either `group:name`, or the single part that is present. Matching is exact
/// and case-sensitive: no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Builds the key from a component's optional group and name.
    ///
    /// Empty strings count as absent. Returns `None` when neither part is present;
    /// the caller is expected to warn and skip the component.
    pub fn normalize(group: Option<&str>, name: Option<&str>) -> Option<Self> {
        let group = group.filter(|g| !g.is_empty());
        let name = name.filter(|n| !n.is_empty());

        match (group, name) {
            (Some(group), Some(name)) => Some(Self(format!("{group}{GROUP_SEPARATOR}{name}"))),
            (None, Some(name)) => Some(Self(name.to_string())),
            (Some(group), None) => {
                tracing::warn!(
                    group,
                    "The component only has a group but no name, using group as name"
                );
                Some(Self(group.to_string()))
            }
            (None, None) => None,
        }
    }

    /// True when the key carries a group (`group:name`), which changes how
    /// database entries are compared against it
    pub fn is_group_qualified(&self) -> bool {
        self.0.contains(GROUP_SEPARATOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
