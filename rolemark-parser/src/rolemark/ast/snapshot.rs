//! AST Snapshot - the serializable record form of the tree
//!
//! Every serializer in [formats](crate::rolemark::formats) consumes a [NodeRecord] built by
//! the functions here instead of walking the tree itself.
//!
//! Record fields, in output order:
//!
//!     Type       node kind: Root, Text, Role, File, CodeBlock, EndOfInput
//!     Content    text content; the raw header for roles; empty otherwise
//!     Name       role or file name, omitted when empty
//!     Language   fence language, omitted when empty
//!     Children   child records, omitted when empty

use super::elements::{Node, Root};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};

/// A node in normalized, serializable form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeRecord {
    #[serde(rename = "Type")]
    pub node_type: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}

impl NodeRecord {
    pub fn new(node_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_children(mut self, children: Vec<NodeRecord>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build the record for a whole document
pub fn snapshot_from_root(root: &Root) -> NodeRecord {
    NodeRecord::new(root.node_type(), "").with_children(snapshot_children(&root.children))
}

/// Build the record for a node and all its descendants
pub fn snapshot_from_node(node: &Node) -> NodeRecord {
    let record = match node {
        Node::Text(text) => NodeRecord::new(node.node_type(), text.content.as_str()),
        Node::Role(role) => NodeRecord::new(node.node_type(), role.raw_header.as_str())
            .with_name(role.name.as_str()),
        Node::File(file) => NodeRecord::new(node.node_type(), "")
            .with_name(file.name.as_str())
            .with_language(file.language.as_str()),
        Node::CodeBlock(block) => {
            NodeRecord::new(node.node_type(), "").with_language(block.language.as_str())
        }
        Node::EndOfInput => NodeRecord::new(node.node_type(), ""),
    };
    record.with_children(snapshot_children(node.children()))
}

fn snapshot_children(children: &[Node]) -> Vec<NodeRecord> {
    children.iter().map(snapshot_from_node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemark::ast::{File, Role};

    #[test]
    fn test_role_record_keeps_raw_header() {
        let mut role = Role::new("user", "USER:");
        role.children.push(Node::text("hello"));
        let record = snapshot_from_node(&Node::Role(role));

        assert_eq!(record.node_type, "Role");
        assert_eq!(record.content, "USER:");
        assert_eq!(record.name, "user");
        assert_eq!(record.children, vec![NodeRecord::new("Text", "hello")]);
    }

    #[test]
    fn test_root_record_preserves_order() {
        let mut file = File::new("x.py", "python");
        file.children.push(Node::text("print(1)"));
        let root = Root::new(vec![Node::text("intro"), Node::File(file), Node::EndOfInput]);
        let record = snapshot_from_root(&root);

        let types: Vec<&str> = record.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(types, vec!["Text", "File", "EndOfInput"]);
        assert_eq!(record.children[1].language, "python");
        assert_eq!(record.children[1].children[0].content, "print(1)");
    }
}
