//! # sexpr-sql-core
//!
//! A zero-copy SQL parser that produces a keyword-tagged S-expression tree.
//!
//! This crate provides:
//! - A hand-written lexer whose tokens are byte ranges, never copies
//! - A recursive descent parser with Pratt expression parsing
//! - An arena-backed tree whose identifiers and literals point into the
//!   source text it keeps alive
//!
//! ## Parsing
//!
//! ```rust
//! use sexpr_sql_core::{parse, Keyword};
//!
//! let tree = parse("SELECT * FROM t WHERE a = 1").unwrap();
//! assert_eq!(tree.root().head_keyword(), Some(Keyword::Select));
//! assert_eq!(tree.to_string(), "(:Select (:Mul) (:From t) (:Where (:Eq a 1)))");
//! ```
//!
//! ## Errors
//!
//! The first error aborts the parse and is returned with its location:
//!
//! ```rust
//! use sexpr_sql_core::{parse, ErrorKind};
//!
//! let err = parse("SELECT 1 +").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Syntax);
//! assert_eq!(err.message, "Unexpected end of input: expected expression");
//! ```

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;

pub use ast::{Keyword, Node, NodeId, NodeRef, SqlTree};
pub use config::{IntegerOverflow, ParserConfig};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{ErrorKind, ParseError, Parser};

use tracing::{debug, trace};

/// Parses a single statement, optionally terminated by `;`.
///
/// # Errors
///
/// Returns a `ParseError` on the first lexical or syntax error.
pub fn parse(sql: &str) -> Result<SqlTree, ParseError> {
    parse_with_config(sql, &ParserConfig::default())
}

/// Parses a single statement with the given configuration.
///
/// # Errors
///
/// Returns a `ParseError` on the first lexical or syntax error.
pub fn parse_with_config(sql: &str, config: &ParserConfig) -> Result<SqlTree, ParseError> {
    debug!(len = sql.len(), "parsing statement");
    let result = Parser::new(sql).with_config(config.clone()).parse_statement();
    match &result {
        Ok(tree) => trace!(nodes = tree.len(), "parsed statement"),
        Err(e) => debug!(kind = e.kind.as_str(), error = %e, "parse failed"),
    }
    result
}

/// Parses a `;`-separated script. The returned trees share one copy of
/// the source text.
///
/// # Errors
///
/// Returns a `ParseError` on the first lexical or syntax error, or if the
/// script holds no statement.
pub fn parse_statements(sql: &str) -> Result<Vec<SqlTree>, ParseError> {
    debug!(len = sql.len(), "parsing script");
    let result = Parser::new(sql).parse_statements();
    match &result {
        Ok(trees) => trace!(statements = trees.len(), "parsed script"),
        Err(e) => debug!(kind = e.kind.as_str(), error = %e, "parse failed"),
    }
    result
}
