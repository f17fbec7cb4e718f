//! Configuration file support for nwdi-dcdef.
//!
//! Provides YAML-based configuration through `nwdi-dcdef.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nwdi-dcdef.config.yml";

/// Upper bound for the `jobs` setting
const MAX_JOBS: usize = 256;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_components: Option<Vec<String>>,
    pub jobs: Option<usize>,
    pub descriptor_name: Option<String>,
    pub fail_on_incomplete: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Output format named in the file, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a workspace. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(jobs) = config.jobs {
        if jobs > MAX_JOBS {
            bail!(
                "Invalid config: jobs must be at most {} (got {}).\n\n\
                 💡 Hint: Use 0 to start one worker per CPU.",
                MAX_JOBS,
                jobs
            );
        }
    }

    if let Some(name) = config.descriptor_name.as_deref() {
        if name.trim().is_empty() || name.contains(['/', '\\']) {
            bail!(
                "Invalid config: descriptor_name must be a plain file name (got '{}').\n\n\
                 💡 Hint: The default is \".dcdef\".",
                name
            );
        }
    }

    if let Some(patterns) = config.exclude_components.as_deref() {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!("Invalid config: exclude_components[{}] must not be empty.", i);
            }
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
