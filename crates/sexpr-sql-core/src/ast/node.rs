//! Arena node representation.

use super::Keyword;
use crate::lexer::Span;

/// Position of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of the node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A run of child references owned by a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRange {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl ListRange {
    /// Returns the number of children.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true for the empty list.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A tree node. Exactly one payload is active per tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// Ordered children; meaning is given by the head element.
    List(ListRange),
    /// A keyword tag used as a list head or a modifier.
    Kw(Keyword),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Identifier text, without surrounding quotes.
    Id(Span),
    /// String literal body. Doubled quotes are left as written.
    String(Span),
    /// Hex digits of a blob literal.
    Binary(Span),
}

impl Node {
    /// Returns the source span for identifier, string and binary nodes.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Id(span) | Self::String(span) | Self::Binary(span) => Some(*span),
            _ => None,
        }
    }
}
