//! Groups raw OCR word tokens into visual lines.

use crate::model::{Line, Token};

use super::LayoutConfig;

/// Assemble word tokens into visual lines in a single pass.
///
/// Tokens at or below the confidence cutoff, or with empty trimmed text,
/// are silently dropped and contribute nothing to geometry or text. A
/// surviving token joins the current line while it stays in the same OCR
/// block and within the vertical tolerance of the line's first token;
/// otherwise the current line is sealed and a new one starts.
///
/// Deterministic given deterministic input order, O(n) in the token count.
pub fn assemble(tokens: &[Token], config: &LayoutConfig) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Option<Line> = None;

    for token in tokens {
        if token.confidence <= config.min_confidence || token.is_empty() {
            continue;
        }

        match current.as_mut() {
            Some(line) if !starts_new_line(line, token, config) => {
                line.push_token(token);
            }
            _ => {
                if let Some(line) = current.take() {
                    lines.push(line);
                }
                current = Some(Line::from_token(token));
            }
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }

    log::debug!("assembled {} lines from {} tokens", lines.len(), tokens.len());
    lines
}

/// A token starts a new line when it leaves the current block or drifts
/// vertically past the tolerance. Drift of exactly the tolerance still
/// joins the line.
fn starts_new_line(line: &Line, token: &Token, config: &LayoutConfig) -> bool {
    token.block_id != line.block_id || (token.top - line.top).abs() > config.line_tolerance
}
