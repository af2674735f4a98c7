//! Tree types for parsed rolemark documents
//!
//!     The tree is a plain owned forest: a [Root] owns its children, and every container node
//!     owns its own children. There is no sharing and no parent links.
//!
//!     Shape of a parsed document:
//!
//!         Root
//!           ├── Text | Role | File | CodeBlock   (any number, in source order)
//!           └── EndOfInput                       (always last, exactly once)
//!
//!         Role        -> Text | File | CodeBlock (never another Role)
//!         File        -> Text                    (the body of its code block, inlined)
//!         CodeBlock   -> Text
//!
//!     Fence markers and file terminators only exist while the grammar runs; they are
//!     consumed as delimiters or rolled back and reread as text, so they never appear here.
//!     See [elements](elements) for the node types, [normalization](normalization) for the
//!     text merge pass and [snapshot](snapshot) for the serializable record form.

pub mod elements;
pub mod normalization;
pub mod snapshot;
pub mod traits;

pub use elements::{CodeBlock, File, Node, Role, Root, Text};
pub use normalization::merge_adjacent_text;
pub use snapshot::{snapshot_from_node, snapshot_from_root, NodeRecord};
pub use traits::{AstNode, Container, Visitor};
