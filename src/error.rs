//! Error types for the unscan library.

use std::io;
use thiserror::Error;

/// Result type alias for unscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing an OCR token stream.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as a Tesseract TSV token dump.
    #[error("Unknown file format: not a Tesseract TSV token dump")]
    UnknownFormat,

    /// A row of the token stream could not be parsed.
    #[error("Token stream error at line {line}: {message}")]
    TokenStream {
        /// 1-indexed line number in the input
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Error during rendering (DOCX, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The caller supplied unusable input (e.g. an empty file list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown file format: not a Tesseract TSV token dump"
        );

        let err = Error::TokenStream {
            line: 7,
            message: "expected 12 fields, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Token stream error at line 7: expected 12 fields, found 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
