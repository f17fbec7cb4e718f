/// Mock implementations for testing
mod mock_descriptor_source;
mod mock_progress_reporter;

pub use mock_descriptor_source::MockDescriptorSource;
pub use mock_progress_reporter::MockProgressReporter;
