//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! The parser writes straight into the tree arena; no intermediate typed
//! AST is built.

mod error;
mod expr;
mod parser;
mod pratt;

pub use error::{ErrorKind, ParseError};
pub use parser::Parser;
