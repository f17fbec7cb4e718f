//! nwdi-dcdef - reader for SAP NetWeaver development component definitions
//!
//! A `.dcdef` file declares one development component: its vendor and name,
//! its type, the folders holding its sources, and the components it uses.
//! This crate turns such a file into a [`DevelopmentComponent`] record, and
//! ships a batch driver that reads every descriptor of a workspace.
//!
//! # Architecture
//!
//! - **Domain** (`component_model`): component records, the type registry,
//!   exclusion filtering
//! - **Parser** (`dc_definition`): streaming descriptor reader
//! - **Application** (`application`): the workspace read use case and DTOs
//! - **Ports** (`ports`) and **Adapters** (`adapters`): file system, console
//!   and formatter integration
//! - **Shared** (`shared`): errors, result alias, file safety checks
//!
//! # Example
//!
//! ```no_run
//! use nwdi_dcdef::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ReadComponentsUseCase::new(
//!     FileSystemDescriptorSource::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ReadRequest::new(PathBuf::from("/nwdi/workspace")))?;
//! for component in &response.components {
//!     println!("{} ({} dependencies)", component.qualified_name(), component.dependencies().len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`DevelopmentComponent`]: component_model::domain::DevelopmentComponent

pub mod adapters;
pub mod application;
pub mod component_model;
pub mod config;
pub mod dc_definition;
pub mod logging;
pub mod ports;
pub mod shared;

#[cfg(test)]
mod test_support;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ReadMetadata, ReadRequest, ReadResponse};
    pub use crate::application::use_cases::ReadComponentsUseCase;
    pub use crate::component_model::domain::{
        DependencyReference, DependencyUsage, DevelopmentComponent, DevelopmentComponentType,
    };
    pub use crate::component_model::services::ComponentFilter;
    pub use crate::dc_definition::{DcDefinitionReader, DescriptorError, FailureKind};
    pub use crate::ports::outbound::{
        ComponentFormatter, DescriptorSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
