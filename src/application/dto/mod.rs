/// Data Transfer Objects for application layer
///
/// DTOs carry a read request into the use case and its results out to the
/// formatters, keeping the adapters away from the domain types' internals.
mod output_format;
mod read_request;
mod read_response;

pub use output_format::OutputFormat;
pub use read_request::{ReadRequest, DEFAULT_DESCRIPTOR_NAME};
pub use read_response::{ReadMetadata, ReadResponse};
