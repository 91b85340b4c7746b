//! Expression grammar.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
};
use crate::ast::{Keyword, Node, NodeId};
use crate::config::IntegerOverflow;
use crate::lexer::{Reserved, Span, TokenKind};

impl Parser<'_> {
    /// Parses an expression using Pratt parsing.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<NodeId, ParseError> {
        self.nested(|parser| parser.parse_binary(min_bp))
    }

    fn parse_binary(&mut self, min_bp: u8) -> Result<NodeId, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            // A negated predicate binds like its positive form.
            let negated = self.check_reserved(Reserved::Not)
                && matches!(
                    self.lookahead(1),
                    TokenKind::Reserved(
                        Reserved::In
                            | Reserved::Like
                            | Reserved::Between
                            | Reserved::Glob
                            | Reserved::Regexp
                            | Reserved::Match
                    )
                );
            let op = if negated {
                self.lookahead(1)
            } else {
                self.current.kind.clone()
            };

            let Some((l_bp, r_bp)) = infix_binding_power(&op) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            if negated {
                self.advance()?;
            }

            lhs = match op {
                TokenKind::Reserved(Reserved::Is) => self.parse_is(lhs, r_bp)?,
                TokenKind::Reserved(Reserved::In) => self.parse_in(lhs)?,
                TokenKind::Reserved(Reserved::Between) => self.parse_between(lhs, r_bp)?,
                TokenKind::Reserved(Reserved::Like) => self.parse_like(lhs, r_bp)?,
                _ => {
                    let Some(keyword) = token_to_binary_op(&op) else {
                        break;
                    };
                    self.advance()?;
                    let rhs = self.parse_expression(r_bp)?;
                    self.tagged(keyword, [lhs, rhs])
                }
            };
            if negated {
                lhs = self.tagged(Keyword::Not, [lhs]);
            }
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<NodeId, ParseError> {
        // i64::MIN is only representable with its sign attached.
        if self.check(&TokenKind::Minus) && self.lookahead(1) == TokenKind::MinIntegerMagnitude {
            self.advance()?;
            return self.push_atom(Node::Integer(i64::MIN));
        }

        let kind = &self.current.kind;
        match (prefix_binding_power(kind), token_to_unary_op(kind)) {
            (Some(bp), Some(op)) => {
                self.advance()?;
                let operand = self.parse_expression(bp)?;
                Ok(self.tagged(op, [operand]))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let span = self.current.span;
        match self.current.kind {
            TokenKind::Integer(value) => self.push_atom(Node::Integer(value)),
            TokenKind::MinIntegerMagnitude => match self.config.integer_overflow {
                IntegerOverflow::PromoteToFloat => self.push_atom(Node::Float(2f64.powi(63))),
                IntegerOverflow::Error => Err(ParseError::lexical(
                    format!("Integer literal out of range: {}", self.current_text()),
                    span,
                )),
            },
            TokenKind::Float(value) => self.push_atom(Node::Float(value)),
            TokenKind::String => self.push_atom(Node::String(span)),
            TokenKind::Blob => self.push_atom(Node::Binary(span)),
            TokenKind::Identifier { quoted } => self.parse_name(quoted),
            TokenKind::Parameter { named } => {
                self.advance()?;
                if named {
                    let name = self.builder.id(span);
                    Ok(self.tagged(Keyword::Parameter, [name]))
                } else {
                    Ok(self.tagged(Keyword::Parameter, []))
                }
            }
            TokenKind::LeftParen => {
                self.advance()?;
                let inner = if self.starts_query() {
                    let query = self.parse_query()?;
                    self.tagged(Keyword::ScalarSubquery, [query])
                } else {
                    self.parse_expression(0)?
                };
                self.expect(&TokenKind::RightParen)?;
                Ok(inner)
            }
            TokenKind::Reserved(Reserved::Null) => self.push_constant(Keyword::Null),
            TokenKind::Reserved(Reserved::True) => self.push_constant(Keyword::True),
            TokenKind::Reserved(Reserved::False) => self.push_constant(Keyword::False),
            TokenKind::Reserved(Reserved::CurrentDate) => self.push_constant(Keyword::CurrentDate),
            TokenKind::Reserved(Reserved::CurrentTime) => self.push_constant(Keyword::CurrentTime),
            TokenKind::Reserved(Reserved::CurrentTimestamp) => {
                self.push_constant(Keyword::CurrentTimestamp)
            }
            TokenKind::Reserved(Reserved::Case) => self.parse_case(),
            TokenKind::Reserved(Reserved::Cast) => self.parse_cast(),
            TokenKind::Reserved(Reserved::Exists) => {
                self.advance()?;
                let query = self.parse_parenthesized_query()?;
                Ok(self.tagged(Keyword::Exists, [query]))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn push_constant(&mut self, keyword: Keyword) -> Result<NodeId, ParseError> {
        self.push_atom(Node::Kw(keyword))
    }

    /// Parses a column reference, qualified name or function call.
    fn parse_name(&mut self, quoted: bool) -> Result<NodeId, ParseError> {
        if self.lookahead(1) == TokenKind::LeftParen {
            return self.parse_function_call(quoted);
        }

        let first = self.expect_identifier()?;
        if !self.check(&TokenKind::Dot) {
            return Ok(first);
        }
        let mut parts = vec![first];
        while self.eat(&TokenKind::Dot)? {
            parts.push(self.expect_identifier()?);
        }
        Ok(self.builder.list(parts))
    }

    fn parse_function_call(&mut self, quoted: bool) -> Result<NodeId, ParseError> {
        let aggregate = if quoted {
            None
        } else {
            Keyword::aggregate(self.current_text())
        };
        let name = self.current.span;
        self.advance()?;
        self.expect(&TokenKind::LeftParen)?;

        if aggregate == Some(Keyword::Count) && self.eat(&TokenKind::Star)? {
            self.expect(&TokenKind::RightParen)?;
            let head = self.builder.kw(Keyword::AggregateFunction);
            let function = self.builder.kw(Keyword::CountStar);
            let args = self.builder.list(Vec::<NodeId>::new());
            let mut parts = vec![head, function, args];
            parts.extend(self.parse_filter()?);
            return Ok(self.builder.list(parts));
        }

        let distinct = if self.eat_reserved(Reserved::Distinct)? {
            true
        } else {
            self.eat_reserved(Reserved::All)?;
            false
        };
        let args = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightParen)?;

        // min and max of several values are scalar functions.
        let aggregate = aggregate.filter(|keyword| {
            !(matches!(keyword, Keyword::Min | Keyword::Max) && args.len() > 1)
        });

        let (head, function) = match aggregate {
            Some(keyword) => (
                self.builder.kw(Keyword::AggregateFunction),
                self.builder.kw(keyword),
            ),
            None => (self.builder.kw(Keyword::Function), self.builder.id(name)),
        };
        let mut parts = vec![head, function];
        if distinct {
            parts.push(self.builder.kw(Keyword::Distinct));
        }
        parts.push(self.builder.list(args));
        if aggregate.is_some() {
            parts.extend(self.parse_filter()?);
        }
        Ok(self.builder.list(parts))
    }

    /// Parses an aggregate's `FILTER (WHERE …)` into `(Where …)`.
    fn parse_filter(&mut self) -> Result<Option<NodeId>, ParseError> {
        let is_filter = matches!(self.current.kind, TokenKind::Identifier { quoted: false })
            && self.current_text().eq_ignore_ascii_case("filter")
            && self.lookahead(1) == TokenKind::LeftParen;
        if !is_filter {
            return Ok(None);
        }
        self.advance()?;
        self.advance()?;
        self.expect_reserved(Reserved::Where)?;
        let condition = self.parse_expression(0)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(self.tagged(Keyword::Where, [condition])))
    }

    fn parse_case(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Case)?;
        let mut parts = vec![self.builder.kw(Keyword::Case)];

        if !self.check_reserved(Reserved::When) {
            parts.push(self.parse_expression(0)?);
        }

        if !self.check_reserved(Reserved::When) {
            return Err(self.unexpected("WHEN"));
        }
        while self.eat_reserved(Reserved::When)? {
            parts.push(self.parse_expression(0)?);
            self.expect_reserved(Reserved::Then)?;
            parts.push(self.parse_expression(0)?);
        }

        if self.eat_reserved(Reserved::Else)? {
            let otherwise = self.parse_expression(0)?;
            parts.push(self.tagged(Keyword::Else, [otherwise]));
        }
        self.expect_reserved(Reserved::End)?;
        Ok(self.builder.list(parts))
    }

    fn parse_cast(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Cast)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expression(0)?;
        self.expect_reserved(Reserved::As)?;
        let ty = self.parse_type_name()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(self.tagged(Keyword::Cast, [expr, ty]))
    }

    /// Parses a type name such as `INTEGER`, `DOUBLE PRECISION` or
    /// `DECIMAL(10, 2)`.
    ///
    /// A multi-word name is a single `Id` spanning all of its words.
    pub(super) fn parse_type_name(&mut self) -> Result<NodeId, ParseError> {
        if !matches!(self.current.kind, TokenKind::Identifier { quoted: false }) {
            return Err(self.unexpected("type name"));
        }
        let start = self.current.span.start;
        let mut end = self.current.span.end;
        self.advance()?;
        while matches!(self.current.kind, TokenKind::Identifier { quoted: false }) {
            end = self.current.span.end;
            self.advance()?;
        }
        let name = self.builder.id(Span::new(start, end));

        if !self.eat(&TokenKind::LeftParen)? {
            return Ok(name);
        }
        let head = self.builder.kw(Keyword::Type);
        let mut parts = vec![head, name, self.parse_type_size()?];
        if self.eat(&TokenKind::Comma)? {
            parts.push(self.parse_type_size()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(self.builder.list(parts))
    }

    fn parse_type_size(&mut self) -> Result<NodeId, ParseError> {
        match self.current.kind {
            TokenKind::Integer(value) => self.push_atom(Node::Integer(value)),
            _ => Err(self.unexpected("integer")),
        }
    }

    pub(super) fn parse_parenthesized_query(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        if !self.starts_query() {
            return Err(self.unexpected("SELECT, VALUES or WITH"));
        }
        let query = self.parse_query()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(query)
    }

    /// Parses `IS [NOT] e`.
    fn parse_is(&mut self, lhs: NodeId, r_bp: u8) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Is)?;
        let negated = self.eat_reserved(Reserved::Not)?;
        let rhs = self.parse_expression(r_bp)?;
        let is = self.tagged(Keyword::Is, [lhs, rhs]);
        Ok(if negated {
            self.tagged(Keyword::Not, [is])
        } else {
            is
        })
    }

    /// Parses `IN (e, …)`, `IN ()` or `IN (SELECT …)`.
    fn parse_in(&mut self, lhs: NodeId) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::In)?;
        self.expect(&TokenKind::LeftParen)?;

        if self.starts_query() {
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(self.tagged(Keyword::InQuery, [lhs, query]));
        }

        let items = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightParen)?;
        let items = self.builder.list(items);
        Ok(self.tagged(Keyword::In, [lhs, items]))
    }

    /// Parses `BETWEEN lo AND hi`. The bounds bind tighter than `AND`.
    fn parse_between(&mut self, lhs: NodeId, r_bp: u8) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Between)?;
        let low = self.parse_expression(r_bp)?;
        self.expect_reserved(Reserved::And)?;
        let high = self.parse_expression(r_bp)?;
        Ok(self.tagged(Keyword::Between, [lhs, low, high]))
    }

    /// Parses `LIKE pattern [ESCAPE e]`.
    fn parse_like(&mut self, lhs: NodeId, r_bp: u8) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Like)?;
        let pattern = self.parse_expression(r_bp)?;
        if self.eat_reserved(Reserved::Escape)? {
            let escape = self.parse_expression(r_bp)?;
            return Ok(self.tagged(Keyword::Like, [lhs, pattern, escape]));
        }
        Ok(self.tagged(Keyword::Like, [lhs, pattern]))
    }
}
