//! Record serialization
//!
//! Renders a tree (or any subtree) as nested records. Field names and child order are
//! fixed by [NodeRecord]; `pretty` only changes whitespace.

use super::FormatError;
use crate::rolemark::ast::{snapshot_from_node, snapshot_from_root, Node, NodeRecord, Root};

/// Anything that can be rendered as a record tree
pub trait Snapshot {
    fn to_record(&self) -> NodeRecord;
}

impl Snapshot for Root {
    fn to_record(&self) -> NodeRecord {
        snapshot_from_root(self)
    }
}

impl Snapshot for Node {
    fn to_record(&self) -> NodeRecord {
        snapshot_from_node(self)
    }
}

/// Render `node` as JSON, indented when `pretty` is set, otherwise on a single line
pub fn serialize<N: Snapshot + ?Sized>(node: &N, pretty: bool) -> Result<String, FormatError> {
    let record = node.to_record();
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

pub fn to_yaml<N: Snapshot + ?Sized>(node: &N) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(&node.to_record())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemark::ast::{CodeBlock, Role};

    fn sample() -> Root {
        let mut role = Role::new("ai", "AI:");
        let mut block = CodeBlock::new("");
        block.children.push(Node::text("ls\n"));
        role.children.push(Node::CodeBlock(block));
        Root::new(vec![Node::Role(role), Node::EndOfInput])
    }

    #[test]
    fn test_compact_json() {
        insta::assert_snapshot!(
            serialize(&sample(), false).unwrap(),
            @r#"{"Type":"Root","Content":"","Children":[{"Type":"Role","Content":"AI:","Name":"ai","Children":[{"Type":"CodeBlock","Content":"","Children":[{"Type":"Text","Content":"ls\n"}]}]},{"Type":"EndOfInput","Content":""}]}"#
        );
    }

    #[test]
    fn test_pretty_json_has_same_records() {
        let root = sample();
        let pretty = serialize(&root, true).unwrap();
        assert!(pretty.contains("\n  \"Children\": ["));
        let reparsed: NodeRecord = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reparsed, root.to_record());
    }

    #[test]
    fn test_serialize_subtree() {
        let json = serialize(&Node::text("x"), false).unwrap();
        assert_eq!(json, r#"{"Type":"Text","Content":"x"}"#);
    }

    #[test]
    fn test_yaml_field_names() {
        let yaml = to_yaml(&sample()).unwrap();
        assert!(yaml.starts_with("Type: Root\n"));
        assert!(yaml.contains("Name: ai"));
        assert!(yaml.contains("Type: EndOfInput"));
    }
}
