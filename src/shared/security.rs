use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single descriptor file (10 MiB)
///
/// Real `.dcdef` files are a few kilobytes; anything near this limit is
/// not a development component definition.
pub const MAX_DESCRIPTOR_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed when {}.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a descriptor path is a regular file within the size limit
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, not a regular
/// file, or larger than [`MAX_DESCRIPTOR_SIZE`]
pub fn validate_descriptor_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read descriptor metadata: {}", e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_DESCRIPTOR_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".dcdef");
        fs::write(&file_path, "<development-component/>").unwrap();

        assert!(validate_not_symlink(&file_path, "scanning").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/.dcdef");
        assert!(validate_not_symlink(&path, "scanning").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.dcdef");
        fs::write(&target, "<development-component/>").unwrap();
        let link = temp_dir.path().join(".dcdef");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "scanning").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_descriptor_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".dcdef");
        fs::write(&file_path, "12345").unwrap();

        assert_eq!(validate_descriptor_file(&file_path).unwrap(), 5);
    }

    #[test]
    fn test_validate_descriptor_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_descriptor_file(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/.dcdef");
        let result = validate_file_size(MAX_DESCRIPTOR_SIZE + 1, &path, MAX_DESCRIPTOR_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
