//! Parser
//!
//!     A hand-written recursive-descent parser with unbounded backtracking. Each grammar
//!     rule is a production that either builds a value or reports no match; productions are
//!     composed by ordered choice through a single combinator, [Parser::attempt], which
//!     checkpoints the token source before running a production and rolls back when it fails.
//!     See [combinators](combinators).
//!
//! Ordered Choice
//!
//!     At the top level and inside a role section, the next node is the first of these that
//!     matches:
//!
//!         1. Role         role header, then children up to the next header or end
//!         2. EndOfInput   the terminal token
//!         3. File         file start, newline, code block closed by fence + matching file end
//!         4. CodeBlock    fence, newline, body, closing fence
//!         5. Text         any single token, verbatim
//!
//!     The last rule never fails, so the grammar is total: every token stream parses, and
//!     constructs that do not close properly come back as text. See [grammar](grammar).
//!
//! Driver
//!
//!     The driver asks for nodes until the EndOfInput node shows up, then runs the adjacent
//!     text merge. See [parser](parser).

pub mod combinators;
pub mod grammar;
pub mod parser;

pub use parser::{ParseStats, Parser};

use crate::rolemark::ast::Root;
use crate::rolemark::lexing::{lex, TokenSource};

/// Parse a token stream into a tree
pub fn parse<S: TokenSource>(source: &mut S) -> Root {
    Parser::new(source).parse()
}

/// Lex `text` with the default lexer and parse it
pub fn parse_str(text: &str) -> Root {
    let mut stream = lex(text);
    parse(&mut stream)
}
