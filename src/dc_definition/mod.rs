//! Reading of `.dcdef` development component definitions
//!
//! [`DcDefinitionReader`] walks one descriptor document and fills a
//! [`DevelopmentComponent`](crate::component_model::domain::DevelopmentComponent).
//! The `<dependencies>` block is handed to a dedicated reader that works on
//! the same event source and returns its result when the block closes.
//!
//! Errors never leave the reader: broken streams and malformed markup are
//! logged, field level problems are logged as warnings, and the caller gets
//! whatever could be read.
mod definition_reader;
mod dependencies_reader;
mod error;
mod events;

pub use definition_reader::DcDefinitionReader;
pub use error::{DescriptorError, FailureKind};
