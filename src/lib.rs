//! # unscan
//!
//! Reconstructs a document's visual structure from the flat stream of word
//! tokens an OCR engine produces, then renders it as styled sections.
//!
//! The pipeline has two stages, applied in strict sequence per page:
//! the *line assembler* groups per-word recognition results into visual
//! lines, and the *layout planner* classifies each line's structural role
//! (heading level, body, caption) from geometric and textual cues and
//! derives spacing directives that approximate the source image's visual
//! rhythm. The result renders to DOCX, Markdown, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unscan::{process_file, render};
//!
//! fn main() -> unscan::Result<()> {
//!     // Parse a Tesseract TSV dump and reconstruct its structure
//!     let doc = process_file("page.tsv")?;
//!
//!     // Convert to DOCX
//!     let options = render::RenderOptions::default();
//!     let bytes = render::to_docx(&doc, &options)?;
//!     std::fs::write("page.docx", bytes)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line assembly**: confidence filtering and vertical-tolerance
//!   grouping of raw word tokens
//! - **Structure classification**: heading levels, body text, and caption
//!   labels from size and texture cues
//! - **Multiple output formats**: DOCX, Markdown, plain text, JSON
//! - **Parallel processing**: uses Rayon across multi-page inputs

pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{assemble, plan, LayoutConfig};
pub use model::{Alignment, Document, Line, Metadata, Page, Role, StyledParagraph, Token};
pub use parser::{ErrorMode, ParseOptions, TsvParser};
pub use render::{JsonFormat, PageMargins, RenderOptions};

use std::path::Path;

use rayon::prelude::*;

/// Parse a Tesseract TSV dump and reconstruct a single-page document.
///
/// # Example
///
/// ```no_run
/// use unscan::process_file;
///
/// let doc = process_file("page.tsv").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    process_file_with_options(path, ParseOptions::default(), &LayoutConfig::default())
}

/// Parse a Tesseract TSV dump with custom options.
pub fn process_file_with_options<P: AsRef<Path>>(
    path: P,
    parse_options: ParseOptions,
    config: &LayoutConfig,
) -> Result<Document> {
    let title = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string());
    let parser = TsvParser::with_options(parse_options);
    let tokens = parser.parse_file(path)?;

    let mut doc = document_from_pages(vec![page_from_tokens(1, &tokens, config)]);
    doc.metadata.title = title;
    Ok(doc)
}

/// Reconstruct one document from several TSV dumps, one page per input.
///
/// Inputs are independent, so they are processed in parallel; page order
/// follows input order.
pub fn process_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Document> {
    process_files_with_options(paths, ParseOptions::default(), &LayoutConfig::default())
}

/// Reconstruct one document from several TSV dumps with custom options.
pub fn process_files_with_options<P: AsRef<Path> + Sync>(
    paths: &[P],
    parse_options: ParseOptions,
    config: &LayoutConfig,
) -> Result<Document> {
    if paths.is_empty() {
        return Err(Error::InvalidInput("no input files".to_string()));
    }

    let pages: Vec<Page> = paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let parser = TsvParser::with_options(parse_options.clone());
            let tokens = parser.parse_file(path)?;
            Ok(page_from_tokens(index as u32 + 1, &tokens, config))
        })
        .collect::<Result<_>>()?;

    Ok(document_from_pages(pages))
}

/// Parse TSV content from a string and reconstruct a single-page document.
pub fn process_str(input: &str) -> Result<Document> {
    process_str_with_options(input, ParseOptions::default(), &LayoutConfig::default())
}

/// Parse TSV content from a string with custom options.
pub fn process_str_with_options(
    input: &str,
    parse_options: ParseOptions,
    config: &LayoutConfig,
) -> Result<Document> {
    let parser = TsvParser::with_options(parse_options);
    let tokens = parser.parse_str(input)?;
    Ok(document_from_pages(vec![page_from_tokens(
        1, &tokens, config,
    )]))
}

/// Reconstruct a single-page document from an already-parsed token
/// sequence. Infallible: the reconstruction core is a total function.
pub fn process_tokens(tokens: &[Token], config: &LayoutConfig) -> Document {
    document_from_pages(vec![page_from_tokens(1, tokens, config)])
}

fn page_from_tokens(number: u32, tokens: &[Token], config: &LayoutConfig) -> Page {
    let lines = assemble(tokens, config);
    let paragraphs = plan(&lines, config);
    Page::with_paragraphs(number, paragraphs)
}

fn document_from_pages(pages: Vec<Page>) -> Document {
    let mut doc = Document::new();
    doc.metadata.created = Some(chrono::Utc::now());
    doc.metadata.page_count = pages.len() as u32;
    doc.metadata.word_count = pages
        .iter()
        .flat_map(|p| p.paragraphs.iter())
        .map(|p| p.word_count())
        .sum();
    doc.pages = pages;
    doc
}

/// Builder for reconstructing and rendering OCR token streams.
///
/// # Example
///
/// ```no_run
/// use unscan::Unscan;
///
/// let markdown = Unscan::new()
///     .lenient()
///     .with_frontmatter()
///     .process("page.tsv")?
///     .to_markdown()?;
/// # Ok::<(), unscan::Error>(())
/// ```
pub struct Unscan {
    parse_options: ParseOptions,
    layout_config: LayoutConfig,
    render_options: RenderOptions,
}

impl Unscan {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            layout_config: LayoutConfig::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the token confidence cutoff.
    pub fn with_min_confidence(mut self, confidence: i32) -> Self {
        self.layout_config = self.layout_config.with_min_confidence(confidence);
        self
    }

    /// Set the same-line vertical tolerance in pixels.
    pub fn with_line_tolerance(mut self, tolerance: i32) -> Self {
        self.layout_config = self.layout_config.with_line_tolerance(tolerance);
        self
    }

    /// Replace the whole layout configuration.
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the base font family for rendering.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_font_family(family);
        self
    }

    /// Process a single TSV dump.
    pub fn process<P: AsRef<Path>>(self, path: P) -> Result<UnscanResult> {
        let document =
            process_file_with_options(path, self.parse_options, &self.layout_config)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Process several TSV dumps into one multi-page document.
    pub fn process_files<P: AsRef<Path> + Sync>(self, paths: &[P]) -> Result<UnscanResult> {
        let document =
            process_files_with_options(paths, self.parse_options, &self.layout_config)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Process TSV content from a string.
    pub fn process_str(self, input: &str) -> Result<UnscanResult> {
        let document =
            process_str_with_options(input, self.parse_options, &self.layout_config)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unscan {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of reconstructing a document, ready to render.
pub struct UnscanResult {
    /// The reconstructed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnscanResult {
    /// Convert to packed DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text without paragraph merging.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
