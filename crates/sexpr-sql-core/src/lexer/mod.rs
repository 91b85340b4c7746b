//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written, zero-copy lexer for SQL that
//! produces a stream of tokens carrying byte offsets into the source.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Reserved, Token, TokenKind};
pub use tokenizer::Lexer;
