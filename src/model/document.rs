//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StyledParagraph;

/// A reconstructed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Pages in the document, one per input token stream
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of paragraphs across all pages.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A single page in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Styled paragraphs on the page, in reading order
    pub paragraphs: Vec<StyledParagraph>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            paragraphs: Vec::new(),
        }
    }

    /// Create a page from an already-planned paragraph sequence.
    pub fn with_paragraphs(number: u32, paragraphs: Vec<StyledParagraph>) -> Self {
        Self { number, paragraphs }
    }

    /// Add a paragraph to the page.
    pub fn add_paragraph(&mut self, paragraph: StyledParagraph) {
        self.paragraphs.push(paragraph);
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,

    /// Total number of pages
    pub page_count: u32,

    /// Total number of words across all pages
    pub word_count: usize,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push(format!("pages: {}", self.page_count));
        lines.push(format!("words: {}", self.word_count));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn body(text: &str) -> StyledParagraph {
        StyledParagraph {
            text: text.to_string(),
            role: Role::Body,
            font_size: 11,
            spacing_before: 0,
            spacing_after: 0,
            is_continuation: false,
        }
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_get_page() {
        let mut doc = Document::new();
        doc.add_page(Page::new(1));
        assert!(doc.get_page(0).is_none());
        assert!(doc.get_page(1).is_some());
        assert!(doc.get_page(2).is_none());
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        let mut page = Page::new(1);
        page.add_paragraph(body("First line"));
        page.add_paragraph(body("Second line"));
        doc.add_page(page);

        assert_eq!(doc.plain_text(), "First line\nSecond line");
    }

    #[test]
    fn test_metadata_frontmatter() {
        let metadata = Metadata {
            title: Some("Scanned Notes".to_string()),
            created: None,
            page_count: 2,
            word_count: 120,
        };

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Scanned Notes\""));
        assert!(yaml.contains("pages: 2"));
        assert!(yaml.contains("words: 120"));
    }

    #[test]
    fn test_frontmatter_escapes_quotes() {
        let metadata = Metadata {
            title: Some("A \"quoted\" title".to_string()),
            ..Default::default()
        };
        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.contains("A \\\"quoted\\\" title"));
    }
}
