use crate::application::dto::ReadResponse;
use crate::shared::Result;

/// ComponentFormatter port for rendering component records
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait ComponentFormatter {
    /// Formats all records of a read
    ///
    /// # Arguments
    /// * `response` - Component records and metadata of the read
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, response: &ReadResponse) -> Result<String>;
}
