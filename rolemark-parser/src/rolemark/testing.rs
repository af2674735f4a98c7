//! Testing utilities
//!
//!     Two tools, used throughout the crate's own tests and available to downstream crates:
//!
//!         1. [factories](factories): build tokens directly, to drive the grammar without
//!            going through the lexer.
//!         2. [assert_ast](fn@assert_ast): fluent assertions over a parsed tree.
//!
//! Why Fluent Assertions
//!
//!     Walking the tree by hand in every test means matching on [Node] variants over and
//!     over, and such tests tend to stop at child counts. The assertion builders check kind
//!     and content at any depth, and every failure message carries the path to the node
//!     that did not match (`root[1][0]`).
//!
//!     ```rust,ignore
//!     use rolemark_parser::rolemark::testing::assert_ast;
//!
//!     let root = rolemark_parser::parse_str("USER:\nhi\n```sh\nls\n```\n");
//!     assert_ast(&root)
//!         .child_count(1)
//!         .child(0, |role| {
//!             role.assert_role()
//!                 .name("user")
//!                 .child(1, |block| {
//!                     block.assert_code_block().language("sh").text("ls\n");
//!                 });
//!         })
//!         .ends_with_end_of_input();
//!     ```
//!
//! [Node]: crate::rolemark::ast::Node

pub mod ast_assertions;
pub mod factories;

pub use ast_assertions::{assert_ast, NodeAssertion};
