//! Error types for htmlpart library.

use std::io;
use thiserror::Error;

/// Result type alias for htmlpart operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering HTML parts.
#[derive(Error, Debug)]
pub enum Error {
    /// An alignment value outside its closed enumeration.
    #[error("Unsupported {kind}: {value}")]
    UnsupportedAlignment {
        /// Name of the alignment enumeration (e.g. "HorizontalAlignment")
        kind: &'static str,
        /// The offending value as it was supplied
        value: String,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An inline resource could not be found at its source path.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The document description is malformed.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Error serializing rendered output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn unsupported_alignment(kind: &'static str, value: impl ToString) -> Self {
        Error::UnsupportedAlignment {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_alignment("HorizontalAlignment", 7);
        assert_eq!(err.to_string(), "Unsupported HorizontalAlignment: 7");

        let err = Error::ResourceNotFound("logo.png".to_string());
        assert_eq!(err.to_string(), "Resource not found: logo.png");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
