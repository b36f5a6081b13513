//! Rendering options and configuration.

/// Options for rendering document content.
///
/// Carries the document-level formatting constants the renderers honor:
/// one base font family across all roles, a fixed body size, fixed page
/// margins, and the role-specific caption styling.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base font family for all roles
    pub font_family: String,

    /// Base body text size in points
    pub body_size: u32,

    /// Fixed caption text size in points (overrides the estimate)
    pub caption_size: u32,

    /// Caption text color (hex, no leading '#')
    pub caption_color: String,

    /// Heading and body text color (hex, no leading '#')
    pub text_color: String,

    /// Line-spacing multiplier for continuing body paragraphs
    pub line_spacing: f32,

    /// Page margins in inches
    pub margins: PageMargins,

    /// Include YAML frontmatter in Markdown output
    pub include_frontmatter: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the base body size in points.
    pub fn with_body_size(mut self, size: u32) -> Self {
        self.body_size = size;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = margins;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            body_size: 11,
            caption_size: 9,
            caption_color: "969696".to_string(),
            text_color: "000000".to_string(),
            line_spacing: 1.15,
            margins: PageMargins::default(),
            include_frontmatter: false,
        }
    }
}

/// Page margins in inches, set once on the document before any paragraph
/// is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 0.8,
            bottom: 0.8,
            left: 1.0,
            right: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.font_family, "Calibri");
        assert_eq!(options.body_size, 11);
        assert_eq!(options.caption_size, 9);
        assert!(!options.include_frontmatter);
        assert!((options.margins.top - 0.8).abs() < f32::EPSILON);
        assert!((options.margins.left - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_font_family("Arial")
            .with_body_size(12)
            .with_frontmatter(true);

        assert_eq!(options.font_family, "Arial");
        assert_eq!(options.body_size, 12);
        assert!(options.include_frontmatter);
    }
}
