//! Lexer
//!
//!     This module turns rolemark source text into the token stream the parser consumes.
//!
//! The Lexing Pipeline
//!
//!     1. Core tokenization using logos. See [base_tokenization](base_tokenization).
//!        The source is split into line text and line breaks, nothing else. Carriage
//!        returns in a CRLF pair stay with the line break.
//!
//!     2. Line classification. See [line_classification](line_classification).
//!        Each physical line is checked against the marker patterns (fence, file start,
//!        file end, role header) and becomes one or two tokens. Lines that match nothing
//!        become a single Text token. An EndOfInput token closes the stream.
//!
//!     3. The resulting tokens are wrapped in a [TokenStream](stream::TokenStream), which
//!        implements the checkpoint / rollback contract from [common](common).
//!
//!     Markers are only recognized when they make up a whole line (role headers: the start
//!     of a line). A fence in the middle of a sentence is prose.

pub mod base_tokenization;
pub mod common;
pub mod line_classification;
pub mod stream;

pub use common::{LexError, TokenSource};
pub use line_classification::{Lexer, LexerOptions};
pub use stream::{Checkpoint, TokenStream};

/// Lex `source` with the default options and return a stream ready for parsing
pub fn lex(source: &str) -> TokenStream {
    Lexer::default().lex(source)
}
