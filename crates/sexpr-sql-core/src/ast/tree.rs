//! The parsed tree and borrowed views into it.

use std::borrow::Cow;
use std::sync::Arc;

use super::{Keyword, ListRange, Node, NodeId};
use crate::lexer::Span;

/// A parsed statement: the node arena bundled with the source text that its
/// identifier, string and binary nodes point into.
///
/// The tree is immutable once built. Because it owns (a shared handle to)
/// its source, offsets can never outlive the text they refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlTree {
    source: Arc<str>,
    nodes: Vec<Node>,
    children: Vec<NodeId>,
    root: NodeId,
}

impl SqlTree {
    pub(crate) const fn from_parts(
        source: Arc<str>,
        nodes: Vec<Node>,
        children: Vec<NodeId>,
        root: NodeId,
    ) -> Self {
        Self {
            source,
            nodes,
            children,
            root,
        }
    }

    /// Returns the source text the tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shared handle to the source text.
    #[must_use]
    pub const fn shared_source(&self) -> &Arc<str> {
        &self.source
    }

    /// Returns the root node, always a list holding a whole statement.
    #[must_use]
    pub const fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    /// Returns the node at `id`, if it belongs to this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read-only view of the arena in insertion order.
    ///
    /// Children precede their parents, so the root is the last node.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Serializes the tree into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if a float payload cannot be represented in JSON.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn list_ids(&self, range: ListRange) -> &[NodeId] {
        &self.children[range.start..range.start + range.len]
    }
}

/// A borrowed handle to one node of a [`SqlTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SqlTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// Returns the arena position of the node.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[must_use]
    pub const fn tree(&self) -> &'t SqlTree {
        self.tree
    }

    /// Returns the node itself.
    #[must_use]
    pub fn node(&self) -> Node {
        self.tree.nodes[self.id.index()]
    }

    /// Returns true for list nodes.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self.node(), Node::List(_))
    }

    /// Number of children; zero for anything but a non-empty list.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.node() {
            Node::List(range) => range.len(),
            _ => 0,
        }
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        self.ids().get(index).map(|&id| Self {
            tree: self.tree,
            id,
        })
    }

    /// Iterates over the children in order.
    #[must_use]
    pub fn children(&self) -> Children<'t> {
        Children {
            tree: self.tree,
            ids: self.ids().iter(),
        }
    }

    /// Returns the first child of a list.
    #[must_use]
    pub fn head(&self) -> Option<Self> {
        self.child(0)
    }

    /// Returns the keyword heading this list, if its first child is one.
    #[must_use]
    pub fn head_keyword(&self) -> Option<Keyword> {
        self.head().and_then(|head| head.keyword())
    }

    /// Returns the keyword of a `Kw` node.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.node() {
            Node::Kw(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Returns the value of an `Integer` node.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self.node() {
            Node::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a `Float` node.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.node() {
            Node::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the source span of an `Id`, `String` or `Binary` node.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        self.node().span()
    }

    /// Returns the source text of an `Id`, `String` or `Binary` node,
    /// exactly as written between any quotes.
    #[must_use]
    pub fn text(&self) -> Option<&'t str> {
        let source: &'t str = &self.tree.source;
        self.span().map(|span| span.slice(source))
    }

    /// Returns the text of an `Id` or `String` node with doubled quote
    /// characters collapsed.
    #[must_use]
    pub fn unescaped(&self) -> Option<Cow<'t, str>> {
        let text = self.text()?;
        match self.node() {
            Node::String(_) => Some(unquote(text, '\'')),
            Node::Id(span) => {
                let quote = self.tree.source[..span.start]
                    .chars()
                    .next_back()
                    .filter(|c| matches!(c, '"' | '`'));
                Some(quote.map_or(Cow::Borrowed(text), |q| unquote(text, q)))
            }
            _ => None,
        }
    }

    /// Decodes the hex digits of a `Binary` node.
    #[must_use]
    pub fn blob_bytes(&self) -> Option<Vec<u8>> {
        match self.node() {
            Node::Binary(_) => decode_hex(self.text()?),
            _ => None,
        }
    }

    fn ids(&self) -> &'t [NodeId] {
        match self.node() {
            Node::List(range) => self.tree.list_ids(range),
            _ => &[],
        }
    }
}

impl core::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NodeRef({}: {self})", self.id.index())
    }
}

/// Iterator over the children of a list node.
#[derive(Clone)]
pub struct Children<'t> {
    tree: &'t SqlTree,
    ids: core::slice::Iter<'t, NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.ids.next().map(|&id| NodeRef { tree, id })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.ids.next_back().map(|&id| NodeRef { tree, id })
    }
}

impl ExactSizeIterator for Children<'_> {}

fn unquote(text: &str, quote: char) -> Cow<'_, str> {
    let doubled: String = [quote, quote].iter().collect();
    if text.contains(&doubled) {
        Cow::Owned(text.replace(&doubled, &quote.to_string()))
    } else {
        Cow::Borrowed(text)
    }
}

fn decode_hex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(text.get(i..i + 2)?, 16).ok())
        .collect()
}
