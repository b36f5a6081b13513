//! Markdown rendering for reconstructed documents.

use crate::error::Result;
use crate::model::{Document, Page, Role, StyledParagraph};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for page in &doc.pages {
            self.render_page(&mut output, page);
        }

        Ok(output.trim().to_string())
    }

    fn render_page(&self, output: &mut String, page: &Page) {
        // Continuing body lines are merged into one running paragraph.
        let mut body: Vec<&str> = Vec::new();

        for paragraph in &page.paragraphs {
            if paragraph.role == Role::Body {
                if !paragraph.is_continuation {
                    flush_body(output, &mut body);
                }
                body.push(&paragraph.text);
                continue;
            }

            flush_body(output, &mut body);
            self.render_block(output, paragraph);
        }

        flush_body(output, &mut body);
    }

    fn render_block(&self, output: &mut String, paragraph: &StyledParagraph) {
        if paragraph.is_empty() {
            return;
        }

        match paragraph.role.heading_level() {
            Some(level) => {
                output.push_str(&"#".repeat(level as usize));
                output.push(' ');
                output.push_str(&paragraph.text);
            }
            // Captions render as emphasized lines.
            None => {
                output.push('*');
                output.push_str(&paragraph.text);
                output.push('*');
            }
        }
        output.push_str("\n\n");
    }
}

fn flush_body(output: &mut String, body: &mut Vec<&str>) {
    if body.is_empty() {
        return;
    }
    output.push_str(&body.join(" "));
    output.push_str("\n\n");
    body.clear();
}
