use std::path::PathBuf;

/// File name of a development component definition
pub const DEFAULT_DESCRIPTOR_NAME: &str = ".dcdef";

/// ReadRequest - Input of the workspace read use case
#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// Workspace root that is searched for descriptors
    pub workspace_path: PathBuf,
    /// File name that identifies a descriptor
    pub descriptor_name: String,
    /// Patterns for excluding components from the result
    pub exclude_patterns: Vec<String>,
    /// Number of parser workers; 0 picks one per available CPU
    pub jobs: usize,
}

impl ReadRequest {
    pub fn new(workspace_path: PathBuf) -> Self {
        Self {
            workspace_path,
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            exclude_patterns: Vec::new(),
            jobs: 0,
        }
    }

    pub fn with_descriptor_name(mut self, descriptor_name: impl Into<String>) -> Self {
        self.descriptor_name = descriptor_name.into();
        self
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Worker count after resolving `0` to the available parallelism
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            jobs => jobs,
        }
    }
}
