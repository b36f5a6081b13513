//! Assembled visual lines.

use serde::{Deserialize, Serialize};

use super::Token;

/// A contiguous run of tokens judged to share one visual text line.
///
/// Geometry (`left`, `top`, `height`) and `confidence` are taken from the
/// *first* token that contributed to the line; later tokens only extend the
/// text. A line's `text` is never empty once the line has been sealed into
/// the assembler's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Tokens joined with single spaces
    pub text: String,

    /// Left edge of the first token, in pixels
    pub left: i32,

    /// Top edge of the first token, in pixels
    pub top: i32,

    /// Height of the first token, in pixels
    pub height: u32,

    /// Confidence of the first token (0-100)
    pub confidence: i32,

    /// Block identifier of the first token
    pub block_id: i32,
}

impl Line {
    /// Seed a new line from its first token.
    ///
    /// The token's text is trimmed before it becomes the line text.
    pub fn from_token(token: &Token) -> Self {
        Self {
            text: token.text.trim().to_string(),
            left: token.left,
            top: token.top,
            height: token.height,
            confidence: token.confidence,
            block_id: token.block_id,
        }
    }

    /// Append another token's text, separated by a single space.
    pub fn push_token(&mut self, token: &Token) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(token.text.trim());
    }

    /// Get the bottom edge coordinate.
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// Number of whitespace-separated words in the line.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check if the line has letters and none of them are lowercase.
    pub fn is_all_caps(&self) -> bool {
        let mut has_letter = false;
        for ch in self.text.chars() {
            if ch.is_lowercase() {
                return false;
            }
            if ch.is_alphabetic() {
                has_letter = true;
            }
        }
        has_letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_from_token() {
        let token = Token::new("  Hello ", 5, 10, 18, 92, 2);
        let line = Line::from_token(&token);
        assert_eq!(line.text, "Hello");
        assert_eq!(line.left, 5);
        assert_eq!(line.top, 10);
        assert_eq!(line.confidence, 92);
        assert_eq!(line.bottom(), 28);
    }

    #[test]
    fn test_push_token_joins_with_space() {
        let mut line = Line::from_token(&Token::new("Hello", 0, 0, 18, 92, 1));
        line.push_token(&Token::new("world", 40, 1, 18, 88, 1));
        assert_eq!(line.text, "Hello world");
        // Geometry stays with the first token.
        assert_eq!(line.left, 0);
        assert_eq!(line.confidence, 92);
    }

    #[test]
    fn test_word_count() {
        let line = Line::from_token(&Token::new("one two three", 0, 0, 10, 90, 1));
        assert_eq!(line.word_count(), 3);
    }

    #[test]
    fn test_is_all_caps() {
        let caps = Line::from_token(&Token::new("SECTION 1.2", 0, 0, 10, 90, 1));
        assert!(caps.is_all_caps());

        let mixed = Line::from_token(&Token::new("Section 1.2", 0, 0, 10, 90, 1));
        assert!(!mixed.is_all_caps());

        // Digits and punctuation alone are not "all caps".
        let digits = Line::from_token(&Token::new("123-456", 0, 0, 10, 90, 1));
        assert!(!digits.is_all_caps());
    }
}
