//! Fluent assertion API for parsed trees
//!
//! Each builder holds a reference to the node under test and a context string naming its
//! position in the tree. Assertions panic with that context on mismatch and return the
//! builder so they can be chained.

use crate::rolemark::ast::traits::{AstNode, Container};
use crate::rolemark::ast::{CodeBlock, File, Node, Role, Root, Text};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed document
pub fn assert_ast(root: &Root) -> RootAssertion<'_> {
    RootAssertion { root }
}

pub struct RootAssertion<'a> {
    root: &'a Root,
}

impl<'a> RootAssertion<'a> {
    /// Number of children, the trailing EndOfInput excluded
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.root.content().len();
        assert_eq!(
            actual,
            expected,
            "root: Expected {} nodes before the end marker, found {}: [{}]",
            expected,
            actual,
            summarize(self.root.content())
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth_child(&self.root.children, index, "root"));
        self
    }

    pub fn ends_with_end_of_input(self) -> Self {
        assert!(
            self.root.is_terminated(),
            "root: Expected the last node to be EndOfInput, found [{}]",
            summarize(&self.root.children)
        );
        let markers = self
            .root
            .children
            .iter()
            .filter(|n| n.is_end_of_input())
            .count();
        assert_eq!(
            markers, 1,
            "root: Expected exactly one EndOfInput node, found {}",
            markers
        );
        self
    }

    /// No two Text nodes are adjacent, at any depth
    pub fn is_merged(self) -> Self {
        assert_merged(&self.root.children, "root");
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.node {
            Node::Text(text) => TextAssertion {
                text,
                context: self.context,
            },
            _ => self.wrong_kind("Text"),
        }
    }

    pub fn assert_role(self) -> RoleAssertion<'a> {
        match self.node {
            Node::Role(role) => RoleAssertion {
                role,
                context: self.context,
            },
            _ => self.wrong_kind("Role"),
        }
    }

    pub fn assert_file(self) -> FileAssertion<'a> {
        match self.node {
            Node::File(file) => FileAssertion {
                file,
                context: self.context,
            },
            _ => self.wrong_kind("File"),
        }
    }

    pub fn assert_code_block(self) -> CodeBlockAssertion<'a> {
        match self.node {
            Node::CodeBlock(block) => CodeBlockAssertion {
                block,
                context: self.context,
            },
            _ => self.wrong_kind("CodeBlock"),
        }
    }

    pub fn assert_end_of_input(self) {
        if !self.node.is_end_of_input() {
            self.wrong_kind("EndOfInput")
        }
    }

    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({})",
            self.context,
            expected,
            self.node.node_type(),
            self.node.display_label()
        )
    }
}

pub struct TextAssertion<'a> {
    text: &'a Text,
    context: String,
}

impl TextAssertion<'_> {
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.text.content, expected,
            "{}: Expected text {:?}, found {:?}",
            self.context, expected, self.text.content
        );
        self
    }

    pub fn contains(self, needle: &str) -> Self {
        assert!(
            self.text.content.contains(needle),
            "{}: Expected text to contain {:?}, found {:?}",
            self.context,
            needle,
            self.text.content
        );
        self
    }
}

pub struct RoleAssertion<'a> {
    role: &'a Role,
    context: String,
}

impl<'a> RoleAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.role.name, expected,
            "{}: Expected role name '{}', found '{}'",
            self.context, expected, self.role.name
        );
        self
    }

    pub fn header(self, expected: &str) -> Self {
        assert_eq!(
            self.role.raw_header, expected,
            "{}: Expected role header '{}', found '{}'",
            self.context, expected, self.role.raw_header
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        check_child_count(&self.role.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth_child(&self.role.children, index, &self.context));
        self
    }
}

pub struct FileAssertion<'a> {
    file: &'a File,
    context: String,
}

impl FileAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.file.name, expected,
            "{}: Expected file name '{}', found '{}'",
            self.context, expected, self.file.name
        );
        self
    }

    pub fn language(self, expected: &str) -> Self {
        assert_eq!(
            self.file.language, expected,
            "{}: Expected file language '{}', found '{}'",
            self.context, expected, self.file.language
        );
        self
    }

    /// Full body text
    pub fn text(self, expected: &str) -> Self {
        let actual = self.file.text();
        assert_eq!(
            actual, expected,
            "{}: Expected file body {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
}

pub struct CodeBlockAssertion<'a> {
    block: &'a CodeBlock,
    context: String,
}

impl CodeBlockAssertion<'_> {
    pub fn language(self, expected: &str) -> Self {
        assert_eq!(
            self.block.language, expected,
            "{}: Expected fence language '{}', found '{}'",
            self.context, expected, self.block.language
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = self.block.text();
        assert_eq!(
            actual, expected,
            "{}: Expected code block body {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn nth_child<'a>(children: &'a [Node], index: usize, context: &str) -> NodeAssertion<'a> {
    let node = children.get(index).unwrap_or_else(|| {
        panic!(
            "{}: Expected a child at index {}, found {} children: [{}]",
            context,
            index,
            children.len(),
            summarize(children)
        )
    });
    NodeAssertion {
        node,
        context: format!("{}[{}]", context, index),
    }
}

fn check_child_count(children: &[Node], expected: usize, context: &str) {
    assert_eq!(
        children.len(),
        expected,
        "{}: Expected {} children, found {}: [{}]",
        context,
        expected,
        children.len(),
        summarize(children)
    );
}

fn assert_merged(children: &[Node], context: &str) {
    for (index, pair) in children.windows(2).enumerate() {
        assert!(
            !(pair[0].is_text() && pair[1].is_text()),
            "{}: Text nodes at {} and {} are not merged",
            context,
            index,
            index + 1
        );
    }
    for (index, child) in children.iter().enumerate() {
        assert_merged(child.children(), &format!("{}[{}]", context, index));
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|n| format!("{}({})", n.node_type(), n.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}
