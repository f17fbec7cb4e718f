use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ComponentFormatter;

/// Factory for creating component report formatters
///
/// Selects the formatter adapter for an [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use nwdi_dcdef::application::dto::OutputFormat;
    /// use nwdi_dcdef::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ComponentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use nwdi_dcdef::application::dto::OutputFormat;
    /// use nwdi_dcdef::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON component report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON component report...",
            OutputFormat::Markdown => "📝 Generating Markdown component report...",
        }
    }
}
