use nwdi_dcdef::prelude::*;
use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// Mock DescriptorSource serving descriptors from memory
///
/// Paths registered with [`with_unreadable`](Self::with_unreadable) are
/// discovered but fail to open.
#[derive(Default)]
pub struct MockDescriptorSource {
    descriptors: BTreeMap<PathBuf, Option<String>>,
}

impl MockDescriptorSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, path: &str, content: &str) -> Self {
        self.descriptors
            .insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.descriptors.insert(PathBuf::from(path), None);
        self
    }
}

impl DescriptorSource for MockDescriptorSource {
    fn discover(&self, workspace: &Path, descriptor_name: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .descriptors
            .keys()
            .filter(|path| path.starts_with(workspace))
            .filter(|path| path.file_name().is_some_and(|name| name == descriptor_name))
            .cloned()
            .collect())
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        match self.descriptors.get(path) {
            Some(Some(content)) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            Some(None) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "not found").into()),
        }
    }

    fn locate(&self, workspace: &Path, vendor: &str, name: &str) -> Option<PathBuf> {
        let path = workspace
            .join("DCs")
            .join(vendor)
            .join(name)
            .join("_comp")
            .join(".dcdef");
        self.descriptors.contains_key(&path).then_some(path)
    }
}
