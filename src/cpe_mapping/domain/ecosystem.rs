use std::fmt;

/// Package ecosystem a component originates from.
///
/// Each ecosystem selects one partition of the mapping database (by [`Ecosystem::tag`])
/// and is recognised in a BOM by its package URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    Maven,
    Npm,
    Pypi,
    Nuget,
    Cargo,
    Apk,
    Deb,
}

impl Ecosystem {
    /// Every supported ecosystem, in detection order
    pub const ALL: [Ecosystem; 7] = [
        Ecosystem::Maven,
        Ecosystem::Npm,
        Ecosystem::Pypi,
        Ecosystem::Nuget,
        Ecosystem::Cargo,
        Ecosystem::Apk,
        Ecosystem::Deb,
    ];

    /// Key of this ecosystem's partition in the mapping database
    pub fn tag(self) -> &'static str {
        match self {
            Ecosystem::Maven => "maven",
            Ecosystem::Npm => "npm",
            Ecosystem::Pypi => "pypi",
            Ecosystem::Nuget => "nuget",
            Ecosystem::Cargo => "cargo",
            Ecosystem::Apk => "apk",
            Ecosystem::Deb => "deb",
        }
    }

    /// Package URL prefixes that belong to this ecosystem
    pub fn purl_prefixes(self) -> &'static [&'static str] {
        match self {
            Ecosystem::Maven => &["pkg:maven/"],
            Ecosystem::Npm => &["pkg:npm/"],
            Ecosystem::Pypi => &["pkg:pypi/"],
            Ecosystem::Nuget => &["pkg:nuget/"],
            Ecosystem::Cargo => &["pkg:cargo/"],
            Ecosystem::Apk => &["pkg:apk/"],
            // Debian package URLs use `deb`, some SBOM tools emit `apt`
            Ecosystem::Deb => &["pkg:apt/", "pkg:deb/"],
        }
    }

    /// Returns true if `purl` starts with one of this ecosystem's prefixes
    pub fn owns_purl(self, purl: &str) -> bool {
        self.purl_prefixes()
            .iter()
            .any(|prefix| purl.starts_with(prefix))
    }

    /// Finds the ecosystem a package URL belongs to, if any
    pub fn from_purl(purl: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ecosystem| ecosystem.owns_purl(purl))
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
