/// Filesystem adapters for descriptor discovery and report output
mod descriptor_reader;
mod file_writer;

pub use descriptor_reader::FileSystemDescriptorSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
