/// Domain layer: component records and the services that work on them
///
/// Nothing in here performs I/O.
pub mod domain;
pub mod services;
