//! Core token types shared across the lexer, parser, and tooling.
//!
//!     The lexer does the line-level recognition work (is this line a fence, a file marker,
//!     a role header?) so that the grammar only ever looks at one token kind at a time.
//!     Prose is never broken down further than a line: the grammar treats it as opaque.
//!
//! Token Kinds
//!
//!     Markers:
//!         Role, FileStart, FileEnd, TripleBacktick. These carry a payload: the role name,
//!         the file name, or the fence language (empty for a bare fence).
//!
//!     Content:
//!         Text, Newline. Payload is always empty, the source text is the content.
//!
//!     Terminal:
//!         EndOfInput. Produced once at the end of every stream and then repeated on every
//!         further request. It has no source text.
//!
//!     Every token keeps the exact source text it was produced from, so that any token the
//!     grammar falls back on can be reproduced verbatim as text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Text,
    Newline,
    Role,
    FileStart,
    FileEnd,
    TripleBacktick,
    EndOfInput,
}

impl TokenKind {
    /// Check if this kind carries a meaningful payload
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Role | TokenKind::FileStart | TokenKind::FileEnd | TokenKind::TripleBacktick
        )
    }

    /// Short name used by the simple token format
    pub fn short_name(&self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Newline => "newline",
            TokenKind::Role => "role",
            TokenKind::FileStart => "file-start",
            TokenKind::FileEnd => "file-end",
            TokenKind::TripleBacktick => "fence",
            TokenKind::EndOfInput => "end",
        }
    }
}

/// One lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Role name, file name or fence language. Empty for the other kinds.
    pub payload: String,
    /// The exact source text this token was produced from
    pub source: String,
    /// Byte range of `source` in the lexed text. Synthetic tokens use an empty range.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        payload: impl Into<String>,
        source: impl Into<String>,
        span: Range<usize>,
    ) -> Self {
        Self {
            kind,
            payload: payload.into(),
            source: source.into(),
            span,
        }
    }

    /// The terminal token, positioned at `offset`
    pub fn end_of_input(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", "", offset..offset)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => write!(f, "<text:{}>", self.source),
            TokenKind::Newline | TokenKind::EndOfInput => write!(f, "<{}>", self.kind.short_name()),
            kind => write!(f, "<{}:{}>", kind.short_name(), self.payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_format() {
        let tokens = [
            Token::new(TokenKind::Role, "user", "USER:", 0..5),
            Token::new(TokenKind::Newline, "", "\n", 5..6),
            Token::new(TokenKind::Text, "", "hello", 6..11),
            Token::new(TokenKind::TripleBacktick, "", "```", 11..14),
            Token::end_of_input(14),
        ];
        let simple: String = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(simple, "<role:user><newline><text:hello><fence:><end>");
    }

    #[test]
    fn test_payload_kinds() {
        assert!(TokenKind::Role.has_payload());
        assert!(TokenKind::TripleBacktick.has_payload());
        assert!(!TokenKind::Text.has_payload());
        assert!(!TokenKind::EndOfInput.has_payload());
    }

    #[test]
    fn test_end_of_input() {
        let token = Token::end_of_input(42);
        assert!(token.is_end_of_input());
        assert_eq!(token.source, "");
        assert_eq!(token.span, 42..42);
    }
}
