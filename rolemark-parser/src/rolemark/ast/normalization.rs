//! Adjacent text merge
//!
//!     The grammar wraps every token it falls back on in its own Text node, so a paragraph of
//!     prose arrives as a long run of single-line Text siblings. This pass folds each run into
//!     its first node, recursively, depth first.
//!
//!     The merge never looks past a non-Text sibling: text on either side of a Role, File or
//!     CodeBlock stays separate. Running the pass twice changes nothing.

use super::elements::{Node, Root};

impl Root {
    /// Merge adjacent Text siblings across the whole tree
    pub fn merge_text(&mut self) {
        merge_adjacent_text(&mut self.children);
    }
}

/// Merge runs of adjacent Text nodes in `children` and, recursively, in every descendant
pub fn merge_adjacent_text(children: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());

    for mut child in children.drain(..) {
        if let Some(grandchildren) = child.children_mut() {
            merge_adjacent_text(grandchildren);
        }
        if let (Some(Node::Text(previous)), Node::Text(next)) = (merged.last_mut(), &child) {
            previous.content.push_str(&next.content);
            continue;
        }
        merged.push(child);
    }

    *children = merged;
}
