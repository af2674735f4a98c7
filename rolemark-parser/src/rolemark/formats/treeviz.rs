//! Treeviz formatter
//!
//! A one line per node view of the tree, meant for quickly scanning how a document was
//! understood. Nesting is drawn with box connectors, two columns per level:
//!
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//!     ⧉ 2 nodes
//!     ├─ ◦ Here is the file:↵
//!     ├─ § assistant
//!     │ ├─ / src/main.rs (rust)
//!     │ │ └─ ◦ fn main() {}↵
//!     │ └─ 𝒱 ```sh
//!     │   └─ ◦ cargo run↵
//!     └─ ∎ end of input
//!
//! Icons
//!     Root: ⧉
//!     Role: §
//!     File: /
//!     CodeBlock: 𝒱
//!     Text: ◦
//!     EndOfInput: ∎

use crate::rolemark::ast::{AstNode, Node, Root};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Root" => "⧉",
        "Role" => "§",
        "File" => "/",
        "CodeBlock" => "𝒱",
        "Text" => "◦",
        "EndOfInput" => "∎",
        _ => "○",
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type()),
        truncate(&node.display_label(), LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node.children(), &child_prefix, output);
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == children.len() - 1, output);
    }
}

pub fn to_treeviz_str(root: &Root) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(root.node_type()),
        truncate(&root.display_label(), LABEL_WIDTH)
    );
    format_children(&root.children, "", &mut output);
    output
}
