//! Token factories
//!
//! Each factory returns a token with the same kind, payload and source text the lexer would
//! produce for the corresponding line. Spans are empty: nothing in the grammar reads them.

use crate::rolemark::lexing::TokenStream;
use crate::rolemark::token::{Token, TokenKind};

pub fn text(source: &str) -> Token {
    Token::new(TokenKind::Text, "", source, 0..0)
}

pub fn newline() -> Token {
    Token::new(TokenKind::Newline, "", "\n", 0..0)
}

/// Role header as written in upper case, e.g. `role("user")` is `USER:`
pub fn role(name: &str) -> Token {
    Token::new(
        TokenKind::Role,
        name.to_lowercase(),
        format!("{}:", name.to_uppercase()),
        0..0,
    )
}

pub fn file_start(name: &str) -> Token {
    Token::new(TokenKind::FileStart, name, format!("File: {}", name), 0..0)
}

pub fn file_end(name: &str) -> Token {
    Token::new(TokenKind::FileEnd, name, format!("EOF_{}", name), 0..0)
}

/// Fence line; pass an empty language for a bare fence
pub fn fence(language: &str) -> Token {
    Token::new(
        TokenKind::TripleBacktick,
        language,
        format!("```{}", language),
        0..0,
    )
}

pub fn end_of_input() -> Token {
    Token::end_of_input(0)
}

pub fn stream(tokens: Vec<Token>) -> TokenStream {
    TokenStream::new(tokens)
}
