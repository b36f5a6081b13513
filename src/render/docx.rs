//! DOCX rendering for reconstructed documents.
//!
//! Maps each paragraph's role to a native heading style or a styled plain
//! paragraph and applies the planner's spacing directives verbatim.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run,
    RunFonts, Style, StyleType,
};

use crate::error::{Error, Result};
use crate::model::{Document, Role, StyledParagraph};

use super::RenderOptions;

const TWIPS_PER_INCH: f32 = 1440.0;
const TWIPS_PER_POINT: u32 = 20;
/// Single line spacing in twentieths of a point.
const SINGLE_LINE: f32 = 240.0;

/// Convert a document to packed DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let renderer = DocxRenderer::new(options.clone());
    renderer.render(doc)
}

/// DOCX renderer.
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to DOCX bytes.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut docx = self.document_shell();

        for (index, page) in doc.pages.iter().enumerate() {
            if index > 0 {
                docx = docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
            }
            for paragraph in &page.paragraphs {
                docx = docx.add_paragraph(self.build_paragraph(paragraph));
            }
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| Error::Render(format!("failed to pack document: {}", e)))?;

        log::debug!("rendered {} paragraphs to docx", doc.paragraph_count());
        Ok(cursor.into_inner())
    }

    /// Document-level defaults: base font, base size, page margins, and
    /// the heading styles roles map onto. Set once before any paragraph.
    fn document_shell(&self) -> Docx {
        let margins = self.options.margins;
        Docx::new()
            .page_margin(
                PageMargin::new()
                    .top(twips_from_inches(margins.top))
                    .bottom(twips_from_inches(margins.bottom))
                    .left(twips_from_inches(margins.left))
                    .right(twips_from_inches(margins.right)),
            )
            .default_fonts(RunFonts::new().ascii(self.options.font_family.as_str()))
            .default_size(half_points(self.options.body_size))
            .add_style(heading_style(1))
            .add_style(heading_style(2))
            .add_style(heading_style(3))
    }

    fn build_paragraph(&self, paragraph: &StyledParagraph) -> Paragraph {
        match paragraph.role {
            Role::Header => self.caption(paragraph),
            Role::Heading1 | Role::Heading2 | Role::Heading3 => self.heading(paragraph),
            Role::Body => self.body(paragraph),
        }
    }

    /// De-emphasized center-aligned caption with a fixed size and muted
    /// color, ignoring the estimated size.
    fn caption(&self, paragraph: &StyledParagraph) -> Paragraph {
        let run = Run::new()
            .add_text(paragraph.text.as_str())
            .size(half_points(self.options.caption_size))
            .color(self.options.caption_color.as_str())
            .fonts(RunFonts::new().ascii(self.options.font_family.as_str()));

        Paragraph::new()
            .add_run(run)
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().after(twips_from_points(paragraph.spacing_after)))
    }

    /// Bold heading at the estimated size, mapped to the native heading
    /// style for its level.
    fn heading(&self, paragraph: &StyledParagraph) -> Paragraph {
        let level = paragraph.role.heading_level().unwrap_or(1);
        let run = Run::new()
            .add_text(paragraph.text.as_str())
            .size(half_points(paragraph.font_size))
            .bold()
            .color(self.options.text_color.as_str())
            .fonts(RunFonts::new().ascii(self.options.font_family.as_str()));

        Paragraph::new()
            .style(&format!("Heading{}", level))
            .add_run(run)
            .align(AlignmentType::Left)
            .line_spacing(
                LineSpacing::new()
                    .before(twips_from_points(paragraph.spacing_before))
                    .after(twips_from_points(paragraph.spacing_after)),
            )
    }

    /// Body text at the fixed base size; continuing paragraphs get the
    /// multiple line-spacing rule.
    fn body(&self, paragraph: &StyledParagraph) -> Paragraph {
        let run = Run::new()
            .add_text(paragraph.text.as_str())
            .size(half_points(self.options.body_size))
            .color(self.options.text_color.as_str())
            .fonts(RunFonts::new().ascii(self.options.font_family.as_str()));

        let mut spacing = LineSpacing::new()
            .before(twips_from_points(paragraph.spacing_before))
            .after(0);
        if paragraph.is_continuation {
            spacing = spacing
                .line_rule(LineSpacingType::Auto)
                .line((SINGLE_LINE * self.options.line_spacing).round() as i32);
        }

        Paragraph::new()
            .add_run(run)
            .align(AlignmentType::Left)
            .line_spacing(spacing)
    }
}

fn heading_style(level: u8) -> Style {
    Style::new(format!("Heading{}", level), StyleType::Paragraph)
        .name(format!("Heading {}", level))
}

fn half_points(points: u32) -> usize {
    (points * 2) as usize
}

fn twips_from_points(points: u32) -> u32 {
    points * TWIPS_PER_POINT
}

fn twips_from_inches(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}
