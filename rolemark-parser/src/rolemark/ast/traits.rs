//! AST traits - Common interfaces for uniform node access

use super::elements::{CodeBlock, File, Node, Role, Root, Text};

/// Common information every node can report
pub trait AstNode {
    /// The node kind as it appears in serialized output
    fn node_type(&self) -> &'static str;
    /// One-line human readable summary
    fn display_label(&self) -> String;
}

/// Nodes that own an ordered child list
pub trait Container {
    fn children(&self) -> &[Node];

    /// Concatenated content of the direct Text children
    fn text(&self) -> String {
        self.children()
            .iter()
            .filter_map(Node::as_text)
            .map(|t| t.content.as_str())
            .collect()
    }
}

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
pub trait Visitor {
    fn visit_root(&mut self, _root: &Root) {}
    fn leave_root(&mut self, _root: &Root) {}

    fn visit_role(&mut self, _role: &Role) {}
    fn leave_role(&mut self, _role: &Role) {}

    fn visit_file(&mut self, _file: &File) {}
    fn leave_file(&mut self, _file: &File) {}

    fn visit_code_block(&mut self, _block: &CodeBlock) {}
    fn leave_code_block(&mut self, _block: &CodeBlock) {}

    fn visit_text(&mut self, _text: &Text) {}

    fn visit_end_of_input(&mut self) {}
}
