//! Tesseract TSV format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The column header Tesseract writes as the first line of a TSV dump.
const TSV_HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

/// Token stream format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvFormat {
    /// Number of columns in the header row
    pub columns: usize,
}

impl std::fmt::Display for TsvFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tesseract TSV ({} columns)", self.columns)
    }
}

/// Detect the token stream format from a file path.
///
/// # Arguments
/// * `path` - Path to the TSV dump
///
/// # Returns
/// * `Ok(TsvFormat)` if the file starts with the Tesseract TSV header
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use unscan::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("page.tsv").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<TsvFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;
    detect_format_from_str(&first_line)
}

/// Detect the token stream format from input text.
///
/// Only the first line is inspected; it must match the Tesseract
/// `image_to_data` TSV header exactly.
pub fn detect_format_from_str(input: &str) -> Result<TsvFormat> {
    let first_line = input.lines().next().ok_or(Error::UnknownFormat)?;

    if first_line.trim_end() != TSV_HEADER {
        return Err(Error::UnknownFormat);
    }

    Ok(TsvFormat {
        columns: TSV_HEADER.split('\t').count(),
    })
}

/// Check if a file is a Tesseract TSV token dump.
pub fn is_tsv<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if input text is a Tesseract TSV token dump.
pub fn is_tsv_str(input: &str) -> bool {
    detect_format_from_str(input).is_ok()
}
