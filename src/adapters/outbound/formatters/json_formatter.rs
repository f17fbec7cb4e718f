use crate::application::dto::{ReadMetadata, ReadResponse};
use crate::component_model::domain::DevelopmentComponent;
use crate::ports::outbound::ComponentFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    metadata: &'a ReadMetadata,
    components: Vec<ComponentEntry<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    skipped_descriptors: &'a [PathBuf],
}

#[derive(Debug, Serialize)]
struct ComponentEntry<'a> {
    #[serde(flatten)]
    component: &'a DevelopmentComponent,
    complete: bool,
}

/// JsonFormatter adapter for the machine-readable component report
///
/// Emits `{ "metadata": {...}, "components": [...] }` with one entry per
/// record; `complete` tells consumers whether vendor and name were found.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for JsonFormatter {
    fn format(&self, response: &ReadResponse) -> Result<String> {
        let report = Report {
            metadata: &response.metadata,
            components: response
                .components
                .iter()
                .map(|component| ComponentEntry {
                    component,
                    complete: component.is_complete(),
                })
                .collect(),
            skipped_descriptors: &response.skipped_descriptors,
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize component report: {}", e))
    }
}
