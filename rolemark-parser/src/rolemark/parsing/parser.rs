//! Parser state and driver

use crate::rolemark::ast::{Node, Root};
use crate::rolemark::lexing::TokenSource;
use tracing::debug;

/// Counters collected while parsing, useful to check that every loop makes progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Nodes produced at the root, before merging
    pub root_nodes: usize,
    /// Iterations of role children loops, speculative ones included
    pub role_iterations: usize,
    /// Iterations of code block body loops, speculative ones included
    pub body_iterations: usize,
}

/// Recursive-descent parser over a rewindable token source.
///
/// The parser holds the only cursor into the source for the duration of a parse; separate
/// parsers over separate sources are fully independent.
pub struct Parser<'s, S: TokenSource> {
    pub(crate) source: &'s mut S,
    pub(crate) stats: ParseStats,
}

impl<'s, S: TokenSource> Parser<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        Self {
            source,
            stats: ParseStats::default(),
        }
    }

    /// Parse the whole stream. The returned root always ends with the EndOfInput node.
    pub fn parse(&mut self) -> Root {
        let mut root = Root::default();
        loop {
            let node = self.next_node();
            self.stats.root_nodes += 1;
            let done = node.is_end_of_input();
            root.children.push(node);
            if done {
                break;
            }
        }
        root.merge_text();

        debug!(
            root_nodes = self.stats.root_nodes,
            merged_nodes = root.children.len(),
            "parsed document"
        );
        root
    }

    /// Parse the next node by ordered choice. Never fails: when no structured production
    /// matches, the next token becomes a Text node.
    pub fn next_node(&mut self) -> Node {
        if let Some(role) = self.attempt(Self::role) {
            return Node::Role(role);
        }
        if self.attempt(Self::end_of_input).is_some() {
            return Node::EndOfInput;
        }
        if let Some(file) = self.attempt(Self::file) {
            return Node::File(file);
        }
        if let Some(block) = self.attempt(|parser| parser.code_block(None)) {
            return Node::CodeBlock(block);
        }
        self.any_as_text()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemark::lexing::TokenStream;
    use crate::rolemark::testing::factories::{end_of_input, newline, role, text};

    #[test]
    fn test_empty_stream_is_just_end_of_input() {
        let mut stream = TokenStream::new(Vec::new());
        let root = Parser::new(&mut stream).parse();
        assert_eq!(root.children, vec![Node::EndOfInput]);
    }

    #[test]
    fn test_text_is_merged_after_parse() {
        let mut stream = TokenStream::new(vec![text("a"), newline(), text("b"), end_of_input()]);
        let mut parser = Parser::new(&mut stream);
        let root = parser.parse();

        assert_eq!(root.children, vec![Node::text("a\nb"), Node::EndOfInput]);
        assert_eq!(parser.stats().root_nodes, 4);
    }

    #[test]
    fn test_next_node_dispatches_roles_first() {
        let mut stream = TokenStream::new(vec![role("user"), text("hi")]);
        let mut parser = Parser::new(&mut stream);
        let node = parser.next_node();
        assert_eq!(node.as_role().map(|r| r.name.as_str()), Some("user"));
        assert!(parser.next_node().is_end_of_input());
        assert!(parser.next_node().is_end_of_input());
    }
}
