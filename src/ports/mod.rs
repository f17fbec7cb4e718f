/// Ports layer - Interfaces between the application core and infrastructure
///
/// Outbound ports are what the use case needs from the outside world:
/// a place to find descriptors, somewhere to report progress, a formatter
/// and an output destination.
pub mod outbound;
