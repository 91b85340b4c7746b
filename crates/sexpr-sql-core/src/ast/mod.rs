//! Keyword-tagged S-expression tree for SQL statements.
//!
//! A statement is a [`Node::List`] whose head is usually a [`Keyword`] tag:
//! `SELECT a FROM t` becomes `(:Select (a) (:From t))`. All nodes of one
//! statement live in a single arena inside [`SqlTree`], referenced by
//! [`NodeId`]; identifiers and literals hold byte offsets into the source
//! that the tree keeps alive.

mod builder;
mod display;
mod keyword;
mod node;
mod tree;

pub use builder::TreeBuilder;
pub use keyword::Keyword;
pub use node::{ListRange, Node, NodeId};
pub use tree::{Children, NodeRef, SqlTree};
