use crate::shared::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// DescriptorSource port for finding and opening development component definitions
///
/// Implementations are shared by the parser workers, hence the `Sync` bound.
pub trait DescriptorSource: Sync {
    /// Finds every descriptor file beneath a workspace
    ///
    /// # Arguments
    /// * `workspace` - Root directory to search
    /// * `descriptor_name` - File name of a descriptor (usually `.dcdef`)
    ///
    /// # Returns
    /// Descriptor paths in a stable order
    ///
    /// # Errors
    /// Returns an error if the workspace cannot be listed
    fn discover(&self, workspace: &Path, descriptor_name: &str) -> Result<Vec<PathBuf>>;

    /// Opens one descriptor for reading
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a regular file,
    /// or is larger than allowed
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>>;

    /// Path of the descriptor of a known component inside a workspace
    ///
    /// Returns `None` if the component has no descriptor there.
    fn locate(&self, workspace: &Path, vendor: &str, name: &str) -> Option<PathBuf>;
}
