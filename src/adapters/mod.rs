/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the local file system,
/// the console, and the report formatters.
pub mod outbound;
