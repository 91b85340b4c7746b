//! Arena construction.

use std::sync::Arc;

use super::{Keyword, ListRange, Node, NodeId, SqlTree};
use crate::lexer::Span;

/// Appends nodes to a single arena as grammar rules reduce.
///
/// Children are always built before the list that holds them, so a list
/// records its children as one contiguous run in the child table and the
/// finished tree has no back-edges.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    children: Vec<NodeId>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its position.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Appends a keyword node.
    pub fn kw(&mut self, keyword: Keyword) -> NodeId {
        self.push(Node::Kw(keyword))
    }

    /// Appends an identifier node.
    pub fn id(&mut self, span: Span) -> NodeId {
        self.push(Node::Id(span))
    }

    /// Appends a list node over already built children.
    pub fn list(&mut self, items: impl IntoIterator<Item = NodeId>) -> NodeId {
        let start = self.children.len();
        self.children.extend(items);
        let len = self.children.len() - start;
        self.push(Node::List(ListRange { start, len }))
    }

    /// Number of nodes appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seals the arena into a tree rooted at `root`.
    #[must_use]
    pub fn finish(self, source: Arc<str>, root: NodeId) -> SqlTree {
        SqlTree::from_parts(source, self.nodes, self.children, root)
    }
}
