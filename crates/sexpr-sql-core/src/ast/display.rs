//! S-expression rendering and serde export of trees.
//!
//! `Display` renders keyword tags as `:Tag`, identifiers as written,
//! strings as `'…'` and blobs as `X'…'`:
//!
//! ```text
//! SELECT a FROM t WHERE a = 1
//! (:Select (a) (:From t) (:Where (:Eq a 1)))
//! ```
//!
//! `Serialize` emits every node as a single-key map from its tag to its
//! payload, with offsets instead of text, e.g. `{"Id":{"start":7,"end":8}}`.

use core::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::{Node, NodeRef, SqlTree};

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::List(_) => {
                f.write_str("(")?;
                for (i, child) in self.children().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            Node::Kw(keyword) => write!(f, ":{keyword}"),
            Node::Integer(value) => write!(f, "{value}"),
            Node::Float(value) => write!(f, "{value:?}"),
            Node::Id(_) => f.write_str(self.text().unwrap_or_default()),
            Node::String(_) => write!(f, "'{}'", self.text().unwrap_or_default()),
            Node::Binary(_) => write!(f, "X'{}'", self.text().unwrap_or_default()),
        }
    }
}

impl fmt::Display for SqlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root().fmt(f)
    }
}

struct ChildSeq<'a, 't>(&'a NodeRef<'t>);

impl Serialize for ChildSeq<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for child in self.0.children() {
            seq.serialize_element(&child)?;
        }
        seq.end()
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.node() {
            Node::List(_) => serializer.serialize_newtype_variant("Ast", 0, "List", &ChildSeq(self)),
            Node::Kw(keyword) => serializer.serialize_newtype_variant("Ast", 1, "KW", &keyword),
            Node::Integer(value) => {
                serializer.serialize_newtype_variant("Ast", 2, "Integer", &value)
            }
            Node::Float(value) => serializer.serialize_newtype_variant("Ast", 3, "Float", &value),
            Node::Id(span) => serializer.serialize_newtype_variant("Ast", 4, "Id", &span),
            Node::String(span) => serializer.serialize_newtype_variant("Ast", 5, "String", &span),
            Node::Binary(span) => serializer.serialize_newtype_variant("Ast", 6, "Binary", &span),
        }
    }
}

impl Serialize for SqlTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}
