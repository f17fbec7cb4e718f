use crate::component_model::domain::DevelopmentComponent;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Metadata describing one workspace read
#[derive(Debug, Clone, Serialize)]
pub struct ReadMetadata {
    pub tool: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub workspace: PathBuf,
}

impl ReadMetadata {
    pub fn new(workspace: PathBuf) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            workspace,
        }
    }
}

/// ReadResponse - Result of the workspace read use case
#[derive(Debug, Clone)]
pub struct ReadResponse {
    /// Component records in descriptor discovery order, after exclusion
    pub components: Vec<DevelopmentComponent>,
    pub metadata: ReadMetadata,
    /// Descriptors that could not be opened
    pub skipped_descriptors: Vec<PathBuf>,
}

impl ReadResponse {
    pub fn new(
        components: Vec<DevelopmentComponent>,
        metadata: ReadMetadata,
        skipped_descriptors: Vec<PathBuf>,
    ) -> Self {
        Self {
            components,
            metadata,
            skipped_descriptors,
        }
    }

    /// Records that lack a vendor or a name
    pub fn incomplete_count(&self) -> usize {
        self.components.iter().filter(|c| !c.is_complete()).count()
    }

    pub fn has_incomplete_components(&self) -> bool {
        self.incomplete_count() > 0
    }
}
