use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for any BOM or mapping database we are willing to load (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist passes: callers writing a new file rely on that.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    }
}

/// Reads a file as UTF-8 after checking that it is a regular file,
/// not a symbolic link, and no larger than [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human readable name used in error messages (e.g. "BOM file")
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}
