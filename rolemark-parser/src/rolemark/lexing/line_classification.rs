//! Line classification
//!
//!     Groups the raw logos tokens into physical lines and decides what each line is.
//!     The checks run in a fixed order and the first match wins:
//!
//!         1. Fence:       ```lang             -> TripleBacktick(lang)
//!         2. File start:  File: path/to/name  -> FileStart(path/to/name)
//!         3. File end:    EOF_path/to/name    -> FileEnd(path/to/name)
//!         4. Role header: User: rest of line  -> Role(user) [Text(" rest of line")]
//!         5. Anything else                    -> Text(line)
//!
//!     Fence and file markers must be the whole line (trailing blanks allowed). A role
//!     header only needs to start the line, and only names listed in [LexerOptions::roles]
//!     count, compared case-insensitively. Role payloads are lowercased; the source text
//!     keeps the header as written.
//!
//!     Line breaks always become Newline tokens, and the stream ends with EndOfInput.

use super::base_tokenization::tokenize;
use super::common::LexError;
use super::stream::TokenStream;
use crate::rolemark::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use tracing::debug;

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```([^\s`]*)[ \t]*$").expect("fence pattern"));
static ROLE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*):").expect("role header pattern"));
static ROLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("role name pattern"));

/// Knobs for marker recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Role names recognized as section headers
    pub roles: Vec<String>,
    /// Text that opens a file block line, followed by the file name
    pub file_start_prefix: String,
    /// Text that closes a file block line, immediately followed by the file name
    pub file_end_prefix: String,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            roles: ["user", "assistant", "system", "ai"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            file_start_prefix: "File:".to_string(),
            file_end_prefix: "EOF_".to_string(),
        }
    }
}

/// Turns source text into tokens
#[derive(Debug, Clone)]
pub struct Lexer {
    options: LexerOptions,
    roles: HashSet<String>,
}

impl Lexer {
    /// Build a lexer, validating the options
    pub fn new(options: LexerOptions) -> Result<Self, LexError> {
        check_prefix("file start prefix", &options.file_start_prefix)?;
        check_prefix("file end prefix", &options.file_end_prefix)?;
        if let Some(bad) = options.roles.iter().find(|r| !ROLE_NAME.is_match(r)) {
            return Err(LexError::InvalidRole(bad.clone()));
        }
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: LexerOptions) -> Self {
        let roles = options.roles.iter().map(|r| r.to_lowercase()).collect();
        Self { options, roles }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Tokenize `source` into a stream ready for parsing
    pub fn lex(&self, source: &str) -> TokenStream {
        TokenStream::new(self.tokenize(source))
    }

    /// Tokenize `source`. The last token is always EndOfInput.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut line: Option<Range<usize>> = None;
        let mut line_count = 0;

        for (raw, span) in tokenize(source) {
            if raw.is_line_content() {
                line = Some(match line {
                    Some(open) => open.start..span.end,
                    None => span,
                });
                continue;
            }
            if let Some(range) = line.take() {
                self.classify_line(source, range, &mut tokens);
            }
            line_count += 1;
            tokens.push(Token::new(
                TokenKind::Newline,
                "",
                &source[span.clone()],
                span,
            ));
        }
        if let Some(range) = line.take() {
            self.classify_line(source, range, &mut tokens);
            line_count += 1;
        }
        tokens.push(Token::end_of_input(source.len()));

        debug!(lines = line_count, tokens = tokens.len(), "lexed source");
        tokens
    }

    fn classify_line(&self, source: &str, range: Range<usize>, out: &mut Vec<Token>) {
        let text = &source[range.clone()];

        if let Some(caps) = FENCE.captures(text) {
            out.push(Token::new(TokenKind::TripleBacktick, &caps[1], text, range));
            return;
        }
        if let Some(name) = marker_name(text, &self.options.file_start_prefix, true) {
            out.push(Token::new(TokenKind::FileStart, name, text, range));
            return;
        }
        if let Some(name) = marker_name(text, &self.options.file_end_prefix, false) {
            out.push(Token::new(TokenKind::FileEnd, name, text, range));
            return;
        }
        if let Some(caps) = ROLE_HEADER.captures(text) {
            let name = caps[1].to_lowercase();
            if self.roles.contains(&name) {
                let header_end = range.start + caps[0].len();
                out.push(Token::new(
                    TokenKind::Role,
                    name,
                    &caps[0],
                    range.start..header_end,
                ));
                if header_end < range.end {
                    out.push(Token::new(
                        TokenKind::Text,
                        "",
                        &source[header_end..range.end],
                        header_end..range.end,
                    ));
                }
                return;
            }
        }
        out.push(Token::new(TokenKind::Text, "", text, range));
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::from_valid_options(LexerOptions::default())
    }
}

/// Strip `prefix` from a marker line and return the single word that follows it.
/// `spaced` allows blanks between the prefix and the name.
fn marker_name<'a>(line: &'a str, prefix: &str, spaced: bool) -> Option<&'a str> {
    let rest = line.strip_prefix(prefix)?;
    let rest = if spaced {
        rest.trim_start_matches([' ', '\t'])
    } else {
        rest
    };
    let name = rest.trim_end_matches([' ', '\t']);
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(name)
}

fn check_prefix(name: &'static str, prefix: &str) -> Result<(), LexError> {
    if prefix.trim().is_empty() {
        return Err(LexError::InvalidMarker {
            name,
            reason: "must contain visible characters".to_string(),
        });
    }
    if prefix.contains(['\n', '\r']) {
        return Err(LexError::InvalidMarker {
            name,
            reason: "must fit on a single line".to_string(),
        });
    }
    Ok(())
}
