//! Styled paragraph directives.

use serde::{Deserialize, Serialize};

/// Structural classification of a line, driving rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Small all-caps caption text (running headers/footers, labels)
    Header,
    /// Top-level heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Third-level heading
    Heading3,
    /// Regular body text
    Body,
}

impl Role {
    /// Native heading level (1-3) for heading roles, `None` otherwise.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Role::Heading1 => Some(1),
            Role::Heading2 => Some(2),
            Role::Heading3 => Some(3),
            Role::Header | Role::Body => None,
        }
    }

    /// Check if this role is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Headings render bold; captions and body text do not.
    pub fn is_bold(&self) -> bool {
        self.is_heading()
    }

    /// Alignment implied by the role.
    pub fn alignment(&self) -> Alignment {
        match self {
            Role::Header => Alignment::Center,
            _ => Alignment::Left,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}

/// A line annotated with its structural role and rendering directives.
///
/// Produced once per assembled line and consumed once by a renderer; the
/// renderer maps the role to a native heading level or styled plain
/// paragraph and applies the spacing directives verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledParagraph {
    /// Paragraph text
    pub text: String,

    /// Structural role
    pub role: Role,

    /// Estimated font size in points
    pub font_size: u32,

    /// Space before the paragraph in points
    pub spacing_before: u32,

    /// Space after the paragraph in points
    pub spacing_after: u32,

    /// Whether the paragraph visually merges with the previous one rather
    /// than starting a new block
    pub is_continuation: bool,
}

impl StyledParagraph {
    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check if the paragraph carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
