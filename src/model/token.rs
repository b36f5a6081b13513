//! Raw OCR word tokens.

use serde::{Deserialize, Serialize};

/// One OCR-recognized word with position, size, and confidence.
///
/// Tokens are the immutable input of the reconstruction pipeline, produced
/// by the OCR engine one per recognized word. Their order is engine-defined:
/// not guaranteed to be reading order across blocks, but monotonic within a
/// block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The recognized word
    pub text: String,

    /// Horizontal position of the left edge, in pixels
    pub left: i32,

    /// Vertical position of the top edge, in pixels
    pub top: i32,

    /// Height of the glyph bounding box, in pixels
    pub height: u32,

    /// Recognition confidence (0-100)
    pub confidence: i32,

    /// OCR-engine-assigned block identifier, approximating a
    /// paragraph/region
    pub block_id: i32,
}

impl Token {
    /// Create a new token.
    pub fn new(
        text: impl Into<String>,
        left: i32,
        top: i32,
        height: u32,
        confidence: i32,
        block_id: i32,
    ) -> Self {
        Self {
            text: text.into(),
            left,
            top,
            height,
            confidence,
            block_id,
        }
    }

    /// Get the bottom edge coordinate.
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// Check if the token carries any recognized text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
