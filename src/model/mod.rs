//! Document model types for reconstructed OCR content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! token stream parsing and content rendering: raw word tokens, assembled
//! lines, styled paragraphs, and the page/document containers.

mod document;
mod line;
mod paragraph;
mod token;

pub use document::{Document, Metadata, Page};
pub use line::Line;
pub use paragraph::{Alignment, Role, StyledParagraph};
pub use token::Token;
