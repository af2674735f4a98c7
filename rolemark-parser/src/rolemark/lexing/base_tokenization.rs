//! Core tokenization using logos
//!
//! The logos stage only knows about lines. Everything that gives a line meaning happens in
//! [line_classification](super::line_classification).

use logos::Logos;
use std::ops::Range;

/// Raw tokens produced by logos
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    // Line breaks, CRLF included
    #[regex(r"\r?\n")]
    Newline,

    // A lone carriage return is line content
    #[token("\r")]
    CarriageReturn,

    // Everything up to the next line break
    #[regex(r"[^\r\n]+")]
    LineText,
}

impl RawToken {
    /// Check if this token is part of a line's content
    pub fn is_line_content(&self) -> bool {
        matches!(self, RawToken::LineText | RawToken::CarriageReturn)
    }
}

/// Tokenize a string and collect tokens with their spans
pub fn tokenize(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
