//! Tesseract TSV token stream parsing.
//!
//! Tesseract's `image_to_data` output is a 12-column TSV: level, page_num,
//! block_num, par_num, line_num, word_num, left, top, width, height, conf,
//! text. Rows at levels 1-4 describe page/block/paragraph/line containers
//! and carry no text; only level-5 (word) rows become [`Token`]s.

use std::fs;
use std::io::Read;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::detect;
use crate::error::{Error, Result};
use crate::model::Token;

use super::{ErrorMode, ParseOptions};

/// The TSV level that marks a word row.
const WORD_LEVEL: u8 = 5;

/// Number of columns in a Tesseract TSV row.
const COLUMN_COUNT: usize = 12;

/// Parser for Tesseract TSV token dumps.
#[derive(Debug, Clone, Default)]
pub struct TsvParser {
    options: ParseOptions,
}

impl TsvParser {
    /// Create a parser with default options (strict mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a TSV file into a token sequence.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Token>> {
        let input = fs::read_to_string(path)?;
        self.parse_str(&input)
    }

    /// Parse TSV content from a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Token>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.parse_str(&input)
    }

    /// Parse TSV content from a string.
    ///
    /// The first line must be the Tesseract TSV header. Word rows become
    /// tokens in input order; container rows (levels 1-4) are skipped.
    /// Low-confidence and empty-text tokens are kept; filtering them is
    /// the line assembler's contract.
    pub fn parse_str(&self, input: &str) -> Result<Vec<Token>> {
        detect::detect_format_from_str(input)?;

        let mut tokens = Vec::new();

        // Line 1 is the header; data rows start at line 2.
        for (idx, row) in input.lines().enumerate().skip(1) {
            let row = row.trim_end_matches('\r');
            if row.is_empty() {
                continue;
            }

            match self.parse_row(row) {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => {}
                Err(message) => match self.options.error_mode {
                    ErrorMode::Strict => {
                        return Err(Error::TokenStream {
                            line: idx + 1,
                            message,
                        });
                    }
                    ErrorMode::Lenient => {
                        log::warn!("skipping malformed row at line {}: {}", idx + 1, message);
                    }
                },
            }
        }

        log::debug!("parsed {} word tokens", tokens.len());
        Ok(tokens)
    }

    /// Parse a single data row. Returns `Ok(None)` for container rows.
    fn parse_row(&self, row: &str) -> std::result::Result<Option<Token>, String> {
        // The trailing text field may itself contain tab characters.
        let fields: Vec<&str> = row.splitn(COLUMN_COUNT, '\t').collect();
        if fields.len() < COLUMN_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                COLUMN_COUNT,
                fields.len()
            ));
        }

        let level: u8 = parse_field(fields[0], "level")?;
        if level != WORD_LEVEL {
            return Ok(None);
        }

        let block_id: i32 = parse_field(fields[2], "block_num")?;
        let left: i32 = parse_field(fields[6], "left")?;
        let top: i32 = parse_field(fields[7], "top")?;
        let height: u32 = parse_field(fields[9], "height")?;

        // Tesseract writes word confidence as a float (e.g. "96.063").
        let confidence: f32 = parse_field(fields[10], "conf")?;
        let confidence = confidence.round() as i32;

        let text: String = fields[11].nfc().collect();

        Ok(Some(Token {
            text,
            left,
            top,
            height,
            confidence,
            block_id,
        }))
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, name: &str) -> std::result::Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid {} value: {:?}", name, value))
}
