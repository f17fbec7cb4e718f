/// Formatter adapters for the component report
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
