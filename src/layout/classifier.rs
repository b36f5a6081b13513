//! Structural role classification for assembled lines.

use crate::model::{Line, Role};

use super::LayoutConfig;

/// Geometric and textual features a line is classified from.
#[derive(Debug, Clone, Copy)]
pub struct LineFeatures {
    /// Estimated font size in points
    pub font_size: u32,
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Whether the line is fully upper-case
    pub all_caps: bool,
}

impl LineFeatures {
    /// Extract features from a line.
    pub fn of(line: &Line, config: &LayoutConfig) -> Self {
        Self {
            font_size: estimate_font_size(line.height, config),
            word_count: line.word_count(),
            all_caps: line.is_all_caps(),
        }
    }
}

/// Estimate the point size from an OCR glyph bounding-box height.
///
/// The reported height overstates the true point size; the correction
/// factor compensates, and the floor prevents unreadably small output.
/// Monotonic in height.
pub fn estimate_font_size(height: u32, config: &LayoutConfig) -> u32 {
    let scaled = (height as f32 * config.size_correction).round() as u32;
    scaled.max(config.min_font_size)
}

type Predicate = fn(&LineFeatures, &LayoutConfig) -> bool;

/// Classification rules in precedence order; the first match wins.
const RULES: &[(Predicate, Role)] = &[
    (is_caption, Role::Header),
    (is_heading1, Role::Heading1),
    (is_heading2, Role::Heading2),
    (is_heading3, Role::Heading3),
];

/// Classify a line's structural role.
///
/// A total, deterministic function of (text, estimated size, word count);
/// lines matching no rule are body text.
pub fn classify(features: &LineFeatures, config: &LayoutConfig) -> Role {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(features, config))
        .map(|(_, role)| *role)
        .unwrap_or(Role::Body)
}

/// Small all-caps strings (running headers/footers, labels) render as
/// de-emphasized captions regardless of their nominal size.
fn is_caption(features: &LineFeatures, config: &LayoutConfig) -> bool {
    features.all_caps
        && features.word_count <= config.caption_words
        && features.font_size < config.caption_size
}

fn is_heading1(features: &LineFeatures, config: &LayoutConfig) -> bool {
    features.font_size >= config.heading1_size
}

/// The short-standalone disjunct captures titles and labels that are
/// visually prominent despite a modest measured size.
fn is_heading2(features: &LineFeatures, config: &LayoutConfig) -> bool {
    features.font_size >= config.heading2_size
        || (features.word_count <= config.standalone_words
            && features.font_size >= config.standalone_size)
}

fn is_heading3(features: &LineFeatures, config: &LayoutConfig) -> bool {
    features.font_size >= config.heading3_size
}
