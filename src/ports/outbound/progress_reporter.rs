use std::path::Path;

/// ProgressReporter port for user feedback during a workspace read
///
/// Messages go to the user, not to the log; implementations usually write
/// to stderr so stdout stays free for the formatted output.
pub trait ProgressReporter {
    /// Reports a plain status message
    fn report(&self, message: &str);

    /// Reports that `current` of `total` descriptors have been read
    ///
    /// # Arguments
    /// * `current` - Descriptors read so far
    /// * `total` - Descriptors discovered
    /// * `descriptor` - The descriptor finished last, if any
    fn report_progress(&self, current: usize, total: usize, descriptor: Option<&Path>);

    /// Reports a descriptor that was skipped
    ///
    /// # Arguments
    /// * `descriptor` - The skipped descriptor
    /// * `reason` - Why it could not be read
    fn report_skipped(&self, descriptor: &Path, reason: &str);

    /// Reports completion of the read
    fn report_completion(&self, message: &str);
}
