//! Plain text rendering for reconstructed documents.

use crate::error::Result;
use crate::model::{Document, Role};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Continuing body lines are merged into one paragraph; everything else
/// becomes its own paragraph separated by blank lines.
pub fn to_text(doc: &Document, _options: &RenderOptions) -> Result<String> {
    let mut blocks: Vec<String> = Vec::new();

    for page in &doc.pages {
        let mut body: Vec<&str> = Vec::new();
        for paragraph in &page.paragraphs {
            if paragraph.role == Role::Body && paragraph.is_continuation && !body.is_empty() {
                body.push(&paragraph.text);
                continue;
            }
            if !body.is_empty() {
                blocks.push(body.join(" "));
                body.clear();
            }
            if paragraph.role == Role::Body {
                body.push(&paragraph.text);
            } else {
                blocks.push(paragraph.text.clone());
            }
        }
        if !body.is_empty() {
            blocks.push(body.join(" "));
        }
    }

    Ok(blocks.join("\n\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, StyledParagraph};

    fn paragraph(text: &str, role: Role, is_continuation: bool) -> StyledParagraph {
        StyledParagraph {
            text: text.to_string(),
            role,
            font_size: 11,
            spacing_before: 0,
            spacing_after: 0,
            is_continuation,
        }
    }

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_page(Page::with_paragraphs(
            1,
            vec![
                paragraph("Heading", Role::Heading2, false),
                paragraph("First line", Role::Body, false),
                paragraph("continues.", Role::Body, true),
            ],
        ));

        let text = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(text, "Heading\n\nFirst line continues.");
    }

    #[test]
    fn test_to_text_empty() {
        let text = to_text(&Document::new(), &RenderOptions::default()).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_pages_separated() {
        let mut doc = Document::new();
        doc.add_page(Page::with_paragraphs(
            1,
            vec![paragraph("Page one.", Role::Body, false)],
        ));
        doc.add_page(Page::with_paragraphs(
            2,
            vec![paragraph("Page two.", Role::Body, false)],
        ));

        let text = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(text, "Page one.\n\nPage two.");
    }
}
