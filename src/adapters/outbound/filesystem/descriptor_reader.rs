use crate::ports::outbound::DescriptorSource;
use crate::shared::error::DcdefError;
use crate::shared::security::validate_descriptor_file;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory below the workspace root that holds the component sources
const COMPONENTS_DIR: &str = "DCs";

/// Directory of a component that holds its descriptor
const COMPONENT_META_DIR: &str = "_comp";

/// File name of a development component definition
const DESCRIPTOR_FILE: &str = ".dcdef";

/// FileSystemDescriptorSource adapter for descriptors on the local file system
///
/// Discovery walks the workspace recursively and never follows symbolic
/// links. Opening checks that the descriptor is a regular file of sane size.
pub struct FileSystemDescriptorSource;

impl FileSystemDescriptorSource {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, dir: &Path, descriptor_name: &str, found: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| DcdefError::InvalidWorkspacePath {
            path: dir.to_path_buf(),
            reason: format!("Failed to list directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_symlink() {
                debug!(path = %path.display(), "not following symbolic link");
            } else if file_type.is_dir() {
                // unreadable subdirectories do not abort the whole walk
                if let Err(e) = self.collect(&path, descriptor_name, found) {
                    warn!(path = %path.display(), error = %e, "skipping directory");
                }
            } else if file_type.is_file() && entry.file_name() == descriptor_name {
                found.push(path);
            }
        }

        Ok(())
    }
}

impl Default for FileSystemDescriptorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorSource for FileSystemDescriptorSource {
    fn discover(&self, workspace: &Path, descriptor_name: &str) -> Result<Vec<PathBuf>> {
        if !workspace.is_dir() {
            return Err(DcdefError::WorkspaceNotFound {
                path: workspace.to_path_buf(),
                suggestion: "Specify an existing workspace directory with --path".to_string(),
            }
            .into());
        }

        let mut found = Vec::new();
        self.collect(workspace, descriptor_name, &mut found)?;
        found.sort();

        debug!(
            workspace = %workspace.display(),
            count = found.len(),
            "discovered descriptor files"
        );
        Ok(found)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        let size = validate_descriptor_file(path).map_err(|e| DcdefError::DescriptorReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let file = File::open(path).map_err(|e| DcdefError::DescriptorReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        debug!(path = %path.display(), size, "opened descriptor");
        Ok(Box::new(file))
    }

    fn locate(&self, workspace: &Path, vendor: &str, name: &str) -> Option<PathBuf> {
        // component names use '/' as separator, which maps onto directories
        let path = workspace
            .join(COMPONENTS_DIR)
            .join(vendor)
            .join(name)
            .join(COMPONENT_META_DIR)
            .join(DESCRIPTOR_FILE);

        let metadata = fs::symlink_metadata(&path).ok()?;
        metadata.is_file().then_some(path)
    }
}
