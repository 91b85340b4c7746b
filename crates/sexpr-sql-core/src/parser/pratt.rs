//! Binding powers for Pratt expression parsing.

use crate::ast::Keyword;
use crate::lexer::{Reserved, TokenKind};

/// Binding power of the operand of a prefix `NOT`.
pub const NOT_BINDING_POWER: u8 = 5;

/// Binding power of the operand of a prefix sign or `~`.
pub const UNARY_BINDING_POWER: u8 = 17;

/// Returns the binding power of the operand of a prefix operator.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Minus | TokenKind::Plus | TokenKind::BitNot => Some(UNARY_BINDING_POWER),
        TokenKind::Reserved(Reserved::Not) => Some(NOT_BINDING_POWER),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
///
/// Returns `None` if the token is not an infix operator. A `NOT` in infix
/// position only negates a predicate (`NOT IN`, `NOT LIKE`, `NOT GLOB`,
/// ...); the parser looks past it and asks for the power of the following
/// word.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR (lowest precedence)
        TokenKind::Reserved(Reserved::Or) => Some((1, 2)),

        // Logical AND
        TokenKind::Reserved(Reserved::And) => Some((3, 4)),

        // Comparison operators
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Reserved(
            Reserved::Is
            | Reserved::In
            | Reserved::Like
            | Reserved::Between
            | Reserved::Glob
            | Reserved::Regexp
            | Reserved::Match,
        ) => Some((7, 8)),

        // Bitwise operators and shifts
        TokenKind::BitAnd | TokenKind::BitOr | TokenKind::LeftShift | TokenKind::RightShift => {
            Some((9, 10))
        }

        // Additive
        TokenKind::Plus | TokenKind::Minus => Some((11, 12)),

        // Multiplicative
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((13, 14)),

        // String concatenation
        TokenKind::Concat => Some((15, 16)),

        _ => None,
    }
}

/// Returns the tag of a plain binary operator.
///
/// `IS`, `IN`, `LIKE` and `BETWEEN` have their own grammar and are not
/// listed here.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<Keyword> {
    match kind {
        TokenKind::Plus => Some(Keyword::Plus),
        TokenKind::Minus => Some(Keyword::Minus),
        TokenKind::Star => Some(Keyword::Mul),
        TokenKind::Slash => Some(Keyword::Div),
        TokenKind::Percent => Some(Keyword::Mod),
        TokenKind::Eq => Some(Keyword::Eq),
        TokenKind::NotEq => Some(Keyword::Ne),
        TokenKind::Lt => Some(Keyword::Lt),
        TokenKind::LtEq => Some(Keyword::Le),
        TokenKind::Gt => Some(Keyword::Gt),
        TokenKind::GtEq => Some(Keyword::Ge),
        TokenKind::Reserved(Reserved::And) => Some(Keyword::And),
        TokenKind::Reserved(Reserved::Or) => Some(Keyword::Or),
        TokenKind::Reserved(Reserved::Glob) => Some(Keyword::Glob),
        TokenKind::Reserved(Reserved::Regexp) => Some(Keyword::Regexp),
        TokenKind::Reserved(Reserved::Match) => Some(Keyword::Match),
        TokenKind::Concat => Some(Keyword::Concat),
        TokenKind::BitAnd => Some(Keyword::BitAnd),
        TokenKind::BitOr => Some(Keyword::BitOr),
        TokenKind::LeftShift => Some(Keyword::Lsh),
        TokenKind::RightShift => Some(Keyword::Rsh),
        _ => None,
    }
}

/// Returns the tag of a prefix operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<Keyword> {
    match kind {
        TokenKind::Minus => Some(Keyword::Minus),
        TokenKind::Plus => Some(Keyword::Plus),
        TokenKind::BitNot => Some(Keyword::BitNot),
        TokenKind::Reserved(Reserved::Not) => Some(Keyword::Not),
        _ => None,
    }
}
