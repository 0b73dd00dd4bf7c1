/// Placeholder replaced by the component version in every CPE template
pub const VERSION_PLACEHOLDER: &str = "VERSION_COMPONENT";

/// Version used when the component has none: the CPE then matches every version
pub const ANY_VERSION: &str = "*";

/// Instantiates a CPE template for a component version.
///
/// Without a version the placeholder becomes `*`, which binds the CPE to all
/// versions of the product; that fallback is logged at warn level.
pub fn instantiate(template: &str, version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => template.replacen(VERSION_PLACEHOLDER, version, 1),
        None => {
            tracing::warn!(
                cpe = template,
                "No version available, the CPE will be mapped to all versions of the package"
            );
            template.replacen(VERSION_PLACEHOLDER, ANY_VERSION, 1)
        }
    }
}
