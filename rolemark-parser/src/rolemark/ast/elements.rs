//! Node definitions
//!
//!     Every node kind is its own struct, and [Node] is the sum type over the kinds that can
//!     appear as children. Field combinations that make no sense for a kind (a name on a text
//!     node, children on the end marker) cannot be built.

use super::traits::{AstNode, Container, Visitor};

/// The document root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub children: Vec<Node>,
}

/// A child node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Role(Role),
    File(File),
    CodeBlock(CodeBlock),
    /// Terminal marker, last child of the root
    EndOfInput,
}

/// A run of verbatim source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

/// A role section: everything from a role header up to the next header or the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    /// The header as it appeared in the source, e.g. `USER:`
    pub raw_header: String,
    pub children: Vec<Node>,
}

/// A named file block. The children are the body of its code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub language: String,
    pub children: Vec<Node>,
}

/// A fenced code block outside any file block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// True when the last child is the EndOfInput marker
    pub fn is_terminated(&self) -> bool {
        matches!(self.children.last(), Some(Node::EndOfInput))
    }

    /// Children without the trailing EndOfInput marker
    pub fn content(&self) -> &[Node] {
        match self.children.split_last() {
            Some((Node::EndOfInput, rest)) => rest,
            _ => &self.children,
        }
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_root(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.leave_root(self);
    }
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Node::EndOfInput)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_role(&self) -> Option<&Role> {
        match self {
            Node::Role(role) => Some(role),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Node::CodeBlock(block) => Some(block),
            _ => None,
        }
    }

    /// Child list of container kinds, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Role(role) => &role.children,
            Node::File(file) => &file.children,
            Node::CodeBlock(block) => &block.children,
            Node::Text(_) | Node::EndOfInput => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Role(role) => Some(&mut role.children),
            Node::File(file) => Some(&mut file.children),
            Node::CodeBlock(block) => Some(&mut block.children),
            Node::Text(_) | Node::EndOfInput => None,
        }
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Text(text) => visitor.visit_text(text),
            Node::Role(role) => {
                visitor.visit_role(role);
                visit_all(visitor, &role.children);
                visitor.leave_role(role);
            }
            Node::File(file) => {
                visitor.visit_file(file);
                visit_all(visitor, &file.children);
                visitor.leave_file(file);
            }
            Node::CodeBlock(block) => {
                visitor.visit_code_block(block);
                visit_all(visitor, &block.children);
                visitor.leave_code_block(block);
            }
            Node::EndOfInput => visitor.visit_end_of_input(),
        }
    }
}

fn visit_all(visitor: &mut dyn Visitor, children: &[Node]) {
    for child in children {
        child.accept(visitor);
    }
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Role {
    pub fn new(name: impl Into<String>, raw_header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_header: raw_header.into(),
            children: Vec::new(),
        }
    }
}

impl File {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            children: Vec::new(),
        }
    }
}

impl CodeBlock {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            children: Vec::new(),
        }
    }
}

impl Container for Root {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Container for Role {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Container for File {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Container for CodeBlock {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for Root {
    fn node_type(&self) -> &'static str {
        "Root"
    }

    fn display_label(&self) -> String {
        format!("{} nodes", self.content().len())
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Text(text) => text.node_type(),
            Node::Role(role) => role.node_type(),
            Node::File(file) => file.node_type(),
            Node::CodeBlock(block) => block.node_type(),
            Node::EndOfInput => "EndOfInput",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Text(text) => text.display_label(),
            Node::Role(role) => role.display_label(),
            Node::File(file) => file.display_label(),
            Node::CodeBlock(block) => block.display_label(),
            Node::EndOfInput => "end of input".to_string(),
        }
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.content.replace('\n', "↵")
    }
}

impl AstNode for Role {
    fn node_type(&self) -> &'static str {
        "Role"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl AstNode for File {
    fn node_type(&self) -> &'static str {
        "File"
    }

    fn display_label(&self) -> String {
        if self.language.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.language)
        }
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }

    fn display_label(&self) -> String {
        format!("```{}", self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_skips_end_marker() {
        let root = Root::new(vec![Node::text("a"), Node::EndOfInput]);
        assert!(root.is_terminated());
        assert_eq!(root.content(), &[Node::text("a")]);

        let open = Root::new(vec![Node::text("a")]);
        assert!(!open.is_terminated());
        assert_eq!(open.content().len(), 1);
    }

    #[test]
    fn test_labels() {
        let mut file = File::new("src/lib.rs", "rust");
        assert_eq!(file.display_label(), "src/lib.rs (rust)");
        file.language.clear();
        assert_eq!(file.display_label(), "src/lib.rs");
        assert_eq!(Text::new("a\nb").display_label(), "a↵b");
        assert_eq!(CodeBlock::new("go").display_label(), "```go");
        assert_eq!(Node::EndOfInput.node_type(), "EndOfInput");
    }

    #[test]
    fn test_leaf_children_are_empty() {
        assert!(Node::text("x").children().is_empty());
        assert!(Node::EndOfInput.children().is_empty());
        let mut role = Role::new("user", "USER:");
        role.children.push(Node::text("hi"));
        assert_eq!(Node::Role(role).children().len(), 1);
    }
}
