//! # rolemark
//!
//! A parser for the small markup dialect that language-model output uses to mark up
//! conversational roles, named file blocks and fenced code inside free-form prose.
//!
//! File Layout
//!
//!     src/rolemark
//!       ├── token        Token kinds shared by the lexer and the parser
//!       ├── lexing       Text to tokens, plus the rewindable token stream
//!       ├── parsing      Backtracking recursive-descent grammar
//!       ├── ast          Tree types and the text merge pass
//!       ├── formats      JSON / YAML / treeviz renderings of the tree
//!       ├── extraction   File extraction and role routing over a parsed tree
//!       └── testing      Token factories and fluent tree assertions
//!
//! The contract between the stages is small: the lexer produces a [TokenStream] that
//! supports checkpoint and rollback, and the parser turns any such stream into a [Root].
//! Parsing is total, malformed constructs come back as plain text.
//!
//! [TokenStream]: rolemark::lexing::TokenStream
//! [Root]: rolemark::ast::Root

pub mod rolemark;

pub use rolemark::ast::{AstNode, CodeBlock, Container, File, Node, Role, Root, Text};
pub use rolemark::extraction::{
    extract_files, role_sections, sections_for_role, ExtractedFile, RoleSection,
};
pub use rolemark::formats::{serialize, FormatError, OutputFormat};
pub use rolemark::lexing::{lex, Lexer, LexerOptions, TokenSource, TokenStream};
pub use rolemark::parsing::{parse, parse_str, Parser};
pub use rolemark::token::{Token, TokenKind};
