//! Grammar productions
//!
//!     One method per construct. A production reads tokens straight from the source and
//!     returns `None` as soon as the input stops matching; it never rewinds by itself. Callers
//!     that need the input back invoke it through [attempt](Parser::attempt).
//!
//! File Blocks and Ambiguous Fences
//!
//!     A code block inside a file block may legitimately contain a bare fence line (think of
//!     a markdown file being written out). Inside a file block, a fence only closes the block
//!     when it is directly followed by the file end marker for the same file name:
//!
//!         File: a.md
//!         ```markdown
//!         ```                  <- not followed by EOF_a.md: body text
//!         ```
//!         EOF_a.md             <- fence + matching end marker: closes the block
//!
//!     Outside file blocks the first closing fence wins.

use super::parser::Parser;
use crate::rolemark::ast::{CodeBlock, File, Node, Role, Text};
use crate::rolemark::lexing::TokenSource;
use crate::rolemark::token::TokenKind;
use tracing::trace;

/// An opening or closing fence, consumed together with the line break after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceMarker {
    pub language: String,
}

/// A closing fence followed by the matching file end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTerminator {
    pub file_name: String,
}

impl<S: TokenSource> Parser<'_, S> {
    /// Role header, an optional line break, then children until the next role header or
    /// the end of input. The boundary token is left for the enclosing loop.
    pub fn role(&mut self) -> Option<Role> {
        let token = self.source.next_token();
        if token.kind != TokenKind::Role {
            return None;
        }
        let mut role = Role::new(token.payload, token.source);
        self.attempt(Self::newline);

        loop {
            self.stats.role_iterations += 1;
            if matches!(self.peek_kind(), TokenKind::Role | TokenKind::EndOfInput) {
                break;
            }
            let child = self.next_node();
            role.children.push(child);
        }
        Some(role)
    }

    pub fn end_of_input(&mut self) -> Option<()> {
        self.source.next_token().is_end_of_input().then_some(())
    }

    /// File start, a mandatory line break, then a code block that closes with a fence
    /// followed by the matching file end marker.
    pub fn file(&mut self) -> Option<File> {
        let token = self.source.next_token();
        if token.kind != TokenKind::FileStart {
            return None;
        }
        if self.attempt(Self::newline).is_none() {
            trace!(file = %token.payload, "no line break after file start");
            return None;
        }
        let Some(block) = self.code_block(Some(&token.payload)) else {
            trace!(file = %token.payload, "file block is not closed");
            return None;
        };
        Some(File {
            name: token.payload,
            language: block.language,
            children: block.children,
        })
    }

    /// Fenced code block. With `file_name` set, only a fence followed by the matching file
    /// end marker closes the block; unpaired fences become body text. Reaching the end of
    /// input before the block closes fails the whole production.
    pub fn code_block(&mut self, file_name: Option<&str>) -> Option<CodeBlock> {
        let opening = self.fence()?;
        let mut block = CodeBlock::new(opening.language);

        loop {
            self.stats.body_iterations += 1;
            if self.attempt(Self::end_of_input).is_some() {
                trace!(language = %block.language, "unterminated code block");
                return None;
            }
            let closed = match file_name {
                None => self.attempt(Self::fence).is_some(),
                Some(name) => self
                    .attempt(|parser| parser.block_terminator(name))
                    .is_some(),
            };
            if closed {
                break;
            }
            block.children.push(self.any_as_text());
        }
        Some(block)
    }

    /// A fence followed by a line break or the end of input
    pub fn fence(&mut self) -> Option<FenceMarker> {
        let token = self.source.next_token();
        if token.kind != TokenKind::TripleBacktick {
            return None;
        }
        self.attempt(Self::newline_or_end)?;
        Some(FenceMarker {
            language: token.payload,
        })
    }

    /// Closing fence immediately followed by the file end marker for `file_name`
    pub fn block_terminator(&mut self, file_name: &str) -> Option<BlockTerminator> {
        self.fence()?;
        self.file_end(file_name)
    }

    /// File end marker for exactly `file_name`, followed by a line break or the end of input
    pub fn file_end(&mut self, file_name: &str) -> Option<BlockTerminator> {
        let token = self.source.next_token();
        if token.kind != TokenKind::FileEnd || token.payload != file_name {
            return None;
        }
        self.attempt(Self::newline_or_end)?;
        Some(BlockTerminator {
            file_name: token.payload,
        })
    }

    pub fn newline(&mut self) -> Option<()> {
        (self.source.next_token().kind == TokenKind::Newline).then_some(())
    }

    pub fn newline_or_end(&mut self) -> Option<()> {
        self.attempt(Self::newline)
            .or_else(|| self.attempt(Self::end_of_input))
    }

    /// Fallback: any single token, as verbatim text
    pub fn any_as_text(&mut self) -> Node {
        Node::Text(Text::new(self.source.next_token().source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemark::lexing::TokenStream;
    use crate::rolemark::testing::factories::{
        end_of_input, fence, file_end, file_start, newline, role, text,
    };

    fn parser_over(stream: &mut TokenStream) -> Parser<'_, TokenStream> {
        Parser::new(stream)
    }

    #[test]
    fn test_role_optional_newline() {
        let mut stream = TokenStream::new(vec![role("user"), text("hi"), end_of_input()]);
        let role = parser_over(&mut stream).role().expect("role");
        assert_eq!(role.children, vec![Node::text("hi")]);
    }

    #[test]
    fn test_role_stops_before_next_role() {
        let mut stream = TokenStream::new(vec![
            role("user"),
            newline(),
            text("a"),
            role("assistant"),
            text("b"),
        ]);
        let mut parser = parser_over(&mut stream);
        let first = parser.role().expect("role");
        assert_eq!(first.children, vec![Node::text("a")]);
        assert_eq!(parser.peek_kind(), TokenKind::Role);
    }

    #[test]
    fn test_role_rejects_other_tokens() {
        let mut stream = TokenStream::new(vec![text("USER:")]);
        assert!(parser_over(&mut stream).role().is_none());
    }

    #[test]
    fn test_fence_needs_line_break_or_end() {
        let mut stream = TokenStream::new(vec![fence("go"), text("x")]);
        assert!(parser_over(&mut stream).fence().is_none());

        let mut stream = TokenStream::new(vec![fence("go")]);
        assert_eq!(
            parser_over(&mut stream).fence(),
            Some(FenceMarker {
                language: "go".to_string()
            })
        );
    }

    #[test]
    fn test_bare_code_block() {
        let mut stream = TokenStream::new(vec![
            fence("sh"),
            newline(),
            text("ls"),
            newline(),
            fence(""),
            newline(),
            text("after"),
        ]);
        let mut parser = parser_over(&mut stream);
        let block = parser.code_block(None).expect("code block");
        assert_eq!(block.language, "sh");
        assert_eq!(block.children, vec![Node::text("ls"), Node::text("\n")]);
        assert_eq!(parser.any_as_text(), Node::text("after"));
    }

    #[test]
    fn test_unterminated_code_block_fails() {
        let mut stream = TokenStream::new(vec![fence("sh"), newline(), text("ls")]);
        let mut parser = parser_over(&mut stream);
        assert!(parser.attempt(|p| p.code_block(None)).is_none());
        assert_eq!(parser.peek_kind(), TokenKind::TripleBacktick);
    }

    #[test]
    fn test_file_end_must_match_name() {
        let mut stream = TokenStream::new(vec![file_end("b.go"), newline()]);
        assert!(parser_over(&mut stream).file_end("a.go").is_none());

        let mut stream = TokenStream::new(vec![file_end("a.go")]);
        assert_eq!(
            parser_over(&mut stream).file_end("a.go"),
            Some(BlockTerminator {
                file_name: "a.go".to_string()
            })
        );
    }

    #[test]
    fn test_file_end_needs_line_break_or_end() {
        let mut stream = TokenStream::new(vec![file_end("a.go"), text("junk")]);
        let mut parser = parser_over(&mut stream);
        assert!(parser.attempt(|p| p.file_end("a.go")).is_none());
        assert_eq!(parser.peek_kind(), TokenKind::FileEnd);
    }

    #[test]
    fn test_file_end_followed_by_text_does_not_close() {
        let mut stream = TokenStream::new(vec![
            file_start("a.go"),
            newline(),
            fence("go"),
            newline(),
            text("x"),
            newline(),
            fence(""),
            newline(),
            file_end("a.go"),
            text("junk"),
            fence(""),
            newline(),
            file_end("a.go"),
            newline(),
        ]);
        let mut parser = parser_over(&mut stream);
        let file = parser.file().expect("file");
        assert_eq!(file.name, "a.go");
        let body: String = file
            .children
            .iter()
            .filter_map(Node::as_text)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(body, "x\n```\nEOF_a.gojunk");
        assert_eq!(parser.peek_kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn test_file_with_foreign_end_marker_keeps_going() {
        let mut stream = TokenStream::new(vec![
            file_start("a.go"),
            newline(),
            fence("go"),
            newline(),
            fence(""),
            newline(),
            file_end("b.go"),
            newline(),
            fence(""),
            newline(),
            file_end("a.go"),
        ]);
        let file = parser_over(&mut stream).file().expect("file");
        assert_eq!(file.name, "a.go");
        assert_eq!(file.language, "go");
        let body: String = file
            .children
            .iter()
            .filter_map(Node::as_text)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(body, "```\nEOF_b.go\n");
    }

    #[test]
    fn test_file_requires_newline_after_start() {
        let mut stream = TokenStream::new(vec![
            file_start("a.go"),
            fence("go"),
            newline(),
            fence(""),
            newline(),
            file_end("a.go"),
        ]);
        assert!(parser_over(&mut stream).file().is_none());
    }
}
