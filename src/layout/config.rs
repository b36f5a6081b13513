//! Layout heuristics configuration.

/// Tuning constants for line assembly and structure classification.
///
/// The defaults are calibrated for typical body text around 11pt scanned at
/// screen resolution; they are fixed calibration constants, not derived
/// from the document.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Tokens at or below this confidence are discarded.
    pub min_confidence: i32,

    /// Maximum vertical drift in pixels for a token to join the current
    /// line. Exactly this value still joins; one more starts a new line.
    pub line_tolerance: i32,

    /// Correction factor applied to the OCR glyph bounding-box height,
    /// which overstates the true point size.
    pub size_correction: f32,

    /// Floor for the estimated font size.
    pub min_font_size: u32,

    /// Estimated sizes at or above these start heading levels 1-3.
    pub heading1_size: u32,
    /// Threshold for level-2 headings.
    pub heading2_size: u32,
    /// Threshold for level-3 headings.
    pub heading3_size: u32,

    /// Short standalone lines at or above this size promote to level 2.
    pub standalone_size: u32,

    /// Maximum word count for the short-standalone promotion.
    pub standalone_words: usize,

    /// All-caps lines up to this many words are caption candidates.
    pub caption_words: usize,

    /// Caption candidates strictly below this size classify as captions.
    pub caption_size: u32,

    /// Vertical gaps in pixels larger than this start a new paragraph.
    pub paragraph_gap: i32,

    /// Scale from pixel gap to point spacing.
    pub spacing_scale: f32,

    /// Minimum space before a level-2 heading, in points.
    pub heading2_space_before: u32,
    /// Minimum space before a level-3 heading, in points.
    pub heading3_space_before: u32,
    /// Minimum space before a fresh body paragraph, in points.
    pub body_space_before: u32,

    /// Fixed trailing gap after a caption, in points.
    pub caption_space_after: u32,
    /// Space after a level-1 heading, in points.
    pub heading1_space_after: u32,
    /// Space after a level-2 heading, in points.
    pub heading2_space_after: u32,
    /// Space after a level-3 heading, in points.
    pub heading3_space_after: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_confidence: 30,
            line_tolerance: 10,
            size_correction: 0.8,
            min_font_size: 8,
            heading1_size: 22,
            heading2_size: 18,
            heading3_size: 14,
            standalone_size: 10,
            standalone_words: 6,
            caption_words: 15,
            caption_size: 14,
            paragraph_gap: 20,
            spacing_scale: 0.3,
            heading2_space_before: 12,
            heading3_space_before: 10,
            body_space_before: 8,
            caption_space_after: 6,
            heading1_space_after: 8,
            heading2_space_after: 6,
            heading3_space_after: 4,
        }
    }
}

impl LayoutConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token confidence cutoff.
    pub fn with_min_confidence(mut self, confidence: i32) -> Self {
        self.min_confidence = confidence;
        self
    }

    /// Set the same-line vertical tolerance in pixels.
    pub fn with_line_tolerance(mut self, tolerance: i32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the glyph-height correction factor.
    pub fn with_size_correction(mut self, factor: f32) -> Self {
        self.size_correction = factor;
        self
    }

    /// Set the new-paragraph vertical gap in pixels.
    pub fn with_paragraph_gap(mut self, gap: i32) -> Self {
        self.paragraph_gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = LayoutConfig::default();
        assert_eq!(config.min_confidence, 30);
        assert_eq!(config.line_tolerance, 10);
        assert_eq!(config.heading1_size, 22);
        assert_eq!(config.heading2_size, 18);
        assert_eq!(config.heading3_size, 14);
        assert_eq!(config.standalone_size, 10);
        assert!((config.size_correction - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LayoutConfig::new()
            .with_min_confidence(50)
            .with_line_tolerance(4)
            .with_paragraph_gap(30);
        assert_eq!(config.min_confidence, 50);
        assert_eq!(config.line_tolerance, 4);
        assert_eq!(config.paragraph_gap, 30);
    }
}
