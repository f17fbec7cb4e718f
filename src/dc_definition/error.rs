use std::fmt;
use thiserror::Error;

/// Broad class of a document-level failure, as reported in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The underlying stream could not be read
    Stream,
    /// The markup itself is malformed (unbalanced, truncated, bad encoding)
    Structure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Stream => write!(f, "stream"),
            FailureKind::Structure => write!(f, "structure"),
        }
    }
}

/// Errors that abort reading a single descriptor document
///
/// These never leave [`DcDefinitionReader::read`](super::DcDefinitionReader::read);
/// they are logged there and the partially populated record is kept.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("cannot read descriptor: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("descriptor is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("descriptor ended inside <{element}>")]
    UnexpectedEof { element: String },

    #[error("unexpected </{found}>, expected {}", expected_closer(.expected))]
    UnbalancedEndTag {
        expected: Option<String>,
        found: String,
    },

    #[error("descriptor contains no root element")]
    MissingRootElement,

    #[error("unexpected <{element}> after the root element")]
    TrailingContent { element: String },
}

fn expected_closer(expected: &Option<String>) -> String {
    match expected {
        Some(element) => format!("</{}>", element),
        None => "end of document".to_string(),
    }
}

impl DescriptorError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DescriptorError::Xml(quick_xml::Error::Io(_)) => FailureKind::Stream,
            _ => FailureKind::Structure,
        }
    }
}
