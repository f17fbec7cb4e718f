use crate::shared::Result;

/// OutputPresenter port for presenting the formatted component report
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Writes the formatted report to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
