//! SQL statement parser.
//!
//! Recursive descent over the statement grammar. Each rule appends the
//! nodes it recognises to the [`TreeBuilder`] and returns the id of the
//! list (or atom) it built; expressions are handled in `expr`.

use std::sync::Arc;

use super::error::ParseError;
use crate::ast::{Keyword, Node, NodeId, SqlTree, TreeBuilder};
use crate::config::ParserConfig;
use crate::lexer::{Lexer, Reserved, Token, TokenKind};

/// SQL Parser.
///
/// A parser reads one source text. [`Parser::parse_statement`] expects a
/// single statement, [`Parser::parse_statements`] a `;`-separated script.
pub struct Parser<'a> {
    pub(super) input: &'a str,
    source: Arc<str>,
    lexer: Lexer<'a>,
    pub(super) current: Token,
    pub(super) builder: TreeBuilder,
    pub(super) config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            input,
            source: Arc::from(input),
            lexer,
            current,
            builder: TreeBuilder::new(),
            config: ParserConfig::default(),
            depth: 0,
        }
    }

    /// Replaces the default configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.lexer = Lexer::new(self.input).with_integer_overflow(config.integer_overflow);
        self.current = self.lexer.next_token();
        self.config = config;
        self
    }

    /// Parses a single SQL statement, optionally followed by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one valid
    /// statement.
    pub fn parse_statement(&mut self) -> Result<SqlTree, ParseError> {
        self.check_lexical()?;
        let tree = self.parse_tree()?;
        self.eat(&TokenKind::Semicolon)?;
        if !self.current.is_eof() {
            return Err(self.unexpected("end of input"));
        }
        Ok(tree)
    }

    /// Parses a `;`-separated list of statements. Empty statements are
    /// skipped; at least one statement is required.
    ///
    /// All returned trees share this parser's copy of the source text.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` encountered.
    pub fn parse_statements(&mut self) -> Result<Vec<SqlTree>, ParseError> {
        self.check_lexical()?;
        let mut trees = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon)? {}
            if self.current.is_eof() {
                break;
            }
            trees.push(self.parse_tree()?);
            if !self.current.is_eof() {
                self.expect(&TokenKind::Semicolon)?;
            }
        }
        if trees.is_empty() {
            return Err(self.unexpected("statement"));
        }
        Ok(trees)
    }

    fn parse_tree(&mut self) -> Result<SqlTree, ParseError> {
        self.depth = 0;
        let root = self.parse_statement_body()?;
        let builder = std::mem::take(&mut self.builder);
        Ok(builder.finish(Arc::clone(&self.source), root))
    }

    fn parse_statement_body(&mut self) -> Result<NodeId, ParseError> {
        match self.current.as_reserved() {
            Some(Reserved::Select | Reserved::Values | Reserved::With) => self.parse_query(),
            Some(Reserved::Insert) => self.parse_insert(),
            Some(Reserved::Update) => self.parse_update(),
            Some(Reserved::Delete) => self.parse_delete(),
            Some(Reserved::Create) => self.parse_create(),
            Some(Reserved::Drop) => self.parse_drop(),
            _ => Err(self.unexpected("statement")),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Parses a query, with or without a leading `WITH` clause.
    pub(super) fn parse_query(&mut self) -> Result<NodeId, ParseError> {
        self.nested(|parser| {
            if parser.check_reserved(Reserved::With) {
                parser.parse_with()
            } else {
                parser.parse_compound()
            }
        })
    }

    /// Parses `WITH [RECURSIVE] name [(columns)] AS (query), … query` into
    /// `(With [Recursive] ((name [(ColumnNames …)] query) …) query)`.
    fn parse_with(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::With)?;
        let mut parts = vec![self.builder.kw(Keyword::With)];
        if self.eat_reserved(Reserved::Recursive)? {
            parts.push(self.builder.kw(Keyword::Recursive));
        }

        let mut tables = Vec::new();
        loop {
            tables.push(self.parse_common_table()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        parts.push(self.builder.list(tables));
        parts.push(self.parse_compound()?);
        Ok(self.builder.list(parts))
    }

    fn parse_common_table(&mut self) -> Result<NodeId, ParseError> {
        let mut parts = vec![self.expect_identifier()?];
        if self.check(&TokenKind::LeftParen) {
            parts.push(self.parse_column_names()?);
        }
        self.expect_reserved(Reserved::As)?;
        parts.push(self.parse_parenthesized_query()?);
        Ok(self.builder.list(parts))
    }

    /// Parses a select core or `VALUES`, any compound operators that
    /// follow, and the trailing `ORDER BY` / `LIMIT` / `OFFSET`.
    fn parse_compound(&mut self) -> Result<NodeId, ParseError> {
        let mut parts = self.parse_select_core()?;

        while let Some(op) = self.compound_operator()? {
            let left = self.builder.list(parts);
            let right_parts = self.parse_select_core()?;
            let right = self.builder.list(right_parts);
            let head = self.builder.kw(op);
            parts = vec![head, left, right];
        }

        if self.check_reserved(Reserved::Order) {
            self.advance()?;
            self.expect_reserved(Reserved::By)?;
            let mut items = vec![self.builder.kw(Keyword::OrderBy)];
            loop {
                items.push(self.parse_ordering_term()?);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
            parts.push(self.builder.list(items));
        }

        if self.check_reserved(Reserved::Limit) {
            self.advance()?;
            let first = self.parse_expression(0)?;
            let (limit, offset) = if self.eat(&TokenKind::Comma)? {
                (self.parse_expression(0)?, Some(first))
            } else if self.check_reserved(Reserved::Offset) {
                self.advance()?;
                (first, Some(self.parse_expression(0)?))
            } else {
                (first, None)
            };
            parts.push(self.tagged(Keyword::Limit, [limit]));
            if let Some(offset) = offset {
                parts.push(self.tagged(Keyword::Offset, [offset]));
            }
        }

        Ok(self.builder.list(parts))
    }

    fn compound_operator(&mut self) -> Result<Option<Keyword>, ParseError> {
        let op = match self.current.as_reserved() {
            Some(Reserved::Union) => {
                self.advance()?;
                if self.eat_reserved(Reserved::All)? {
                    Keyword::UnionAll
                } else {
                    Keyword::Union
                }
            }
            Some(Reserved::Except) => {
                self.advance()?;
                Keyword::Except
            }
            Some(Reserved::Intersect) => {
                self.advance()?;
                Keyword::Intersect
            }
            _ => return Ok(None),
        };
        Ok(Some(op))
    }

    /// Returns the unfinished parts of a select core so the caller can
    /// append trailing clauses before building the list.
    fn parse_select_core(&mut self) -> Result<Vec<NodeId>, ParseError> {
        if self.check_reserved(Reserved::Values) {
            return self.parse_values();
        }

        self.expect_reserved(Reserved::Select)?;
        let mut parts = vec![self.builder.kw(Keyword::Select)];

        if self.eat_reserved(Reserved::Distinct)? {
            parts.push(self.builder.kw(Keyword::Distinct));
        } else if self.eat_reserved(Reserved::All)? {
            parts.push(self.builder.kw(Keyword::All));
        }

        parts.push(self.parse_result_columns()?);

        if self.eat_reserved(Reserved::From)? {
            let mut items = vec![self.builder.kw(Keyword::From)];
            loop {
                items.push(self.parse_join_source()?);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
            parts.push(self.builder.list(items));
        }

        if let Some(clause) = self.parse_where()? {
            parts.push(clause);
        }

        if self.eat_reserved(Reserved::Group)? {
            self.expect_reserved(Reserved::By)?;
            let mut items = vec![self.builder.kw(Keyword::GroupBy)];
            items.extend(self.parse_expression_list()?);
            parts.push(self.builder.list(items));
        }

        if self.eat_reserved(Reserved::Having)? {
            let condition = self.parse_expression(0)?;
            parts.push(self.tagged(Keyword::Having, [condition]));
        }

        Ok(parts)
    }

    fn parse_values(&mut self) -> Result<Vec<NodeId>, ParseError> {
        self.expect_reserved(Reserved::Values)?;
        let mut parts = vec![self.builder.kw(Keyword::Values)];
        loop {
            self.expect(&TokenKind::LeftParen)?;
            let row = self.parse_expression_list()?;
            self.expect(&TokenKind::RightParen)?;
            parts.push(self.builder.list(row));
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(parts)
    }

    fn parse_result_columns(&mut self) -> Result<NodeId, ParseError> {
        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_result_column()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(self.builder.list(columns))
    }

    fn parse_result_column(&mut self) -> Result<NodeId, ParseError> {
        if self.eat(&TokenKind::Star)? {
            return Ok(self.builder.kw(Keyword::Mul));
        }

        // table.*
        if matches!(self.current.kind, TokenKind::Identifier { .. })
            && self.lookahead(1) == TokenKind::Dot
            && self.lookahead(2) == TokenKind::Star
        {
            let table = self.expect_identifier()?;
            self.advance()?;
            self.advance()?;
            let head = self.builder.kw(Keyword::Mul);
            return Ok(self.builder.list([head, table]));
        }

        let expr = self.parse_expression(0)?;
        self.with_optional_alias(expr)
    }

    /// Wraps `node` as `(As node alias)` if an alias follows.
    fn with_optional_alias(&mut self, node: NodeId) -> Result<NodeId, ParseError> {
        let alias = if self.eat_reserved(Reserved::As)? {
            Some(self.expect_identifier()?)
        } else if matches!(self.current.kind, TokenKind::Identifier { .. }) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(match alias {
            Some(alias) => self.tagged(Keyword::As, [node, alias]),
            None => node,
        })
    }

    fn parse_ordering_term(&mut self) -> Result<NodeId, ParseError> {
        let expr = self.parse_expression(0)?;
        let direction = match self.current.as_reserved() {
            Some(Reserved::Asc) => Keyword::Asc,
            Some(Reserved::Desc) => Keyword::Desc,
            _ => return Ok(expr),
        };
        self.advance()?;
        Ok(self.tagged(direction, [expr]))
    }

    // ------------------------------------------------------------------
    // FROM clause
    // ------------------------------------------------------------------

    /// Parses a table reference followed by any number of joins.
    fn parse_join_source(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_table_ref()?;
        while let Some(kind) = self.join_operator()? {
            let right = self.parse_table_ref()?;
            let head = self.builder.kw(Keyword::Join);
            let kind = self.builder.kw(kind);
            let mut items = vec![head, kind, left, right];
            if self.eat_reserved(Reserved::On)? {
                let condition = self.parse_expression(0)?;
                items.push(self.tagged(Keyword::On, [condition]));
            }
            left = self.builder.list(items);
        }
        Ok(left)
    }

    fn join_operator(&mut self) -> Result<Option<Keyword>, ParseError> {
        let kind = match self.current.as_reserved() {
            Some(Reserved::Join) => Keyword::Inner,
            Some(Reserved::Inner | Reserved::Cross) => {
                self.advance()?;
                Keyword::Inner
            }
            Some(Reserved::Left) => {
                self.advance()?;
                self.eat_reserved(Reserved::Outer)?;
                Keyword::Left
            }
            _ => return Ok(None),
        };
        self.expect_reserved(Reserved::Join)?;
        Ok(Some(kind))
    }

    fn parse_table_ref(&mut self) -> Result<NodeId, ParseError> {
        let table = if self.eat(&TokenKind::LeftParen)? {
            let inner = self.nested(|parser| {
                if parser.starts_query() {
                    parser.parse_query()
                } else {
                    parser.parse_join_source()
                }
            })?;
            self.expect(&TokenKind::RightParen)?;
            inner
        } else {
            self.parse_table_name()?
        };
        self.with_optional_alias(table)
    }

    /// Parses `name` or `schema.name`.
    fn parse_table_name(&mut self) -> Result<NodeId, ParseError> {
        let first = self.expect_identifier()?;
        if self.eat(&TokenKind::Dot)? {
            let name = self.expect_identifier()?;
            Ok(self.builder.list([first, name]))
        } else {
            Ok(first)
        }
    }

    fn parse_where(&mut self) -> Result<Option<NodeId>, ParseError> {
        if !self.eat_reserved(Reserved::Where)? {
            return Ok(None);
        }
        let condition = self.parse_expression(0)?;
        Ok(Some(self.tagged(Keyword::Where, [condition])))
    }

    // ------------------------------------------------------------------
    // Data manipulation
    // ------------------------------------------------------------------

    fn parse_insert(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Insert)?;
        self.expect_reserved(Reserved::Into)?;
        let mut parts = vec![self.builder.kw(Keyword::Insert)];
        parts.push(self.parse_table_name()?);

        if self.check(&TokenKind::LeftParen) {
            parts.push(self.parse_column_names()?);
        }

        if !self.starts_query() {
            return Err(self.unexpected("SELECT, VALUES or WITH"));
        }
        parts.push(self.parse_query()?);
        Ok(self.builder.list(parts))
    }

    fn parse_update(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Update)?;
        let mut parts = vec![self.builder.kw(Keyword::Update)];
        let table = self.parse_table_name()?;
        parts.push(self.with_optional_alias(table)?);

        self.expect_reserved(Reserved::Set)?;
        let mut assignments = Vec::new();
        loop {
            let column = self.expect_identifier()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_expression(0)?;
            assignments.push(self.tagged(Keyword::Eq, [column, value]));
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        parts.push(self.builder.list(assignments));

        if let Some(clause) = self.parse_where()? {
            parts.push(clause);
        }
        Ok(self.builder.list(parts))
    }

    fn parse_delete(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Delete)?;
        self.expect_reserved(Reserved::From)?;
        let mut parts = vec![self.builder.kw(Keyword::Delete)];
        let table = self.parse_table_name()?;
        parts.push(self.with_optional_alias(table)?);
        if let Some(clause) = self.parse_where()? {
            parts.push(clause);
        }
        Ok(self.builder.list(parts))
    }

    /// Parses `(a, b, …)` into `(ColumnNames a b …)`.
    fn parse_column_names(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut items = vec![self.builder.kw(Keyword::ColumnNames)];
        items.extend(self.parse_identifier_list()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(self.builder.list(items))
    }

    // ------------------------------------------------------------------
    // Data definition
    // ------------------------------------------------------------------

    fn parse_create(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Create)?;
        match self.current.as_reserved() {
            Some(Reserved::Table) => self.parse_create_table(),
            Some(Reserved::Unique | Reserved::Index) => self.parse_create_index(),
            Some(Reserved::View) => self.parse_create_view(),
            _ => Err(self.unexpected("TABLE, INDEX or VIEW")),
        }
    }

    fn parse_create_table(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Table)?;
        let head = self.builder.kw(Keyword::CreateTable);
        let name = self.parse_table_name()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut elements = Vec::new();
        loop {
            let element = match self.current.as_reserved() {
                Some(Reserved::Primary | Reserved::Unique) => self.parse_table_constraint()?,
                _ => self.parse_column_def()?,
            };
            elements.push(element);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;

        let elements = self.builder.list(elements);
        Ok(self.builder.list([head, name, elements]))
    }

    fn parse_column_def(&mut self) -> Result<NodeId, ParseError> {
        let mut parts = vec![self.expect_identifier()?];
        if matches!(self.current.kind, TokenKind::Identifier { quoted: false }) {
            parts.push(self.parse_type_name()?);
        }

        loop {
            let constraint = match self.current.as_reserved() {
                Some(Reserved::Primary) => {
                    self.advance()?;
                    self.expect_reserved(Reserved::Key)?;
                    self.builder.kw(Keyword::PrimaryKey)
                }
                Some(Reserved::Unique) => {
                    self.advance()?;
                    self.builder.kw(Keyword::Unique)
                }
                Some(Reserved::Null) => {
                    self.advance()?;
                    self.builder.kw(Keyword::Null)
                }
                Some(Reserved::Not) => {
                    self.advance()?;
                    self.expect_reserved(Reserved::Null)?;
                    let null = self.builder.kw(Keyword::Null);
                    self.tagged(Keyword::Not, [null])
                }
                Some(Reserved::Default) => {
                    self.advance()?;
                    let value = self.parse_expression(0)?;
                    self.tagged(Keyword::Default, [value])
                }
                _ => break,
            };
            parts.push(constraint);
        }

        Ok(self.builder.list(parts))
    }

    fn parse_table_constraint(&mut self) -> Result<NodeId, ParseError> {
        let head = if self.eat_reserved(Reserved::Primary)? {
            self.expect_reserved(Reserved::Key)?;
            Keyword::PrimaryKey
        } else {
            self.expect_reserved(Reserved::Unique)?;
            Keyword::Unique
        };
        let mut items = vec![self.builder.kw(head)];
        self.expect(&TokenKind::LeftParen)?;
        items.extend(self.parse_identifier_list()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(self.builder.list(items))
    }

    fn parse_create_index(&mut self) -> Result<NodeId, ParseError> {
        let mut parts = vec![self.builder.kw(Keyword::CreateIndex)];
        if self.eat_reserved(Reserved::Unique)? {
            parts.push(self.builder.kw(Keyword::Unique));
        }
        self.expect_reserved(Reserved::Index)?;
        parts.push(self.parse_table_name()?);
        self.expect_reserved(Reserved::On)?;
        parts.push(self.parse_table_name()?);

        self.expect(&TokenKind::LeftParen)?;
        let mut terms = Vec::new();
        loop {
            terms.push(self.parse_ordering_term()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        parts.push(self.builder.list(terms));
        Ok(self.builder.list(parts))
    }

    fn parse_create_view(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::View)?;
        let mut parts = vec![self.builder.kw(Keyword::CreateView)];
        parts.push(self.parse_table_name()?);
        if self.check(&TokenKind::LeftParen) {
            parts.push(self.parse_column_names()?);
        }
        self.expect_reserved(Reserved::As)?;
        if !self.starts_query() {
            return Err(self.unexpected("SELECT, VALUES or WITH"));
        }
        parts.push(self.parse_query()?);
        Ok(self.builder.list(parts))
    }

    fn parse_drop(&mut self) -> Result<NodeId, ParseError> {
        self.expect_reserved(Reserved::Drop)?;
        let head = match self.current.as_reserved() {
            Some(Reserved::Table) => Keyword::DropTable,
            Some(Reserved::Index) => Keyword::DropIndex,
            Some(Reserved::View) => Keyword::DropView,
            _ => return Err(self.unexpected("TABLE, INDEX or VIEW")),
        };
        self.advance()?;

        let mut parts = vec![self.builder.kw(head)];
        if self.eat_reserved(Reserved::If)? {
            self.expect_reserved(Reserved::Exists)?;
            parts.push(self.builder.kw(Keyword::IfExists));
        }
        parts.push(self.parse_table_name()?);
        Ok(self.builder.list(parts))
    }

    // ------------------------------------------------------------------
    // Shared helpers
    // ------------------------------------------------------------------

    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<NodeId>, ParseError> {
        let mut exprs = vec![self.parse_expression(0)?];
        while self.eat(&TokenKind::Comma)? {
            exprs.push(self.parse_expression(0)?);
        }
        Ok(exprs)
    }

    fn parse_identifier_list(&mut self) -> Result<Vec<NodeId>, ParseError> {
        let mut ids = vec![self.expect_identifier()?];
        while self.eat(&TokenKind::Comma)? {
            ids.push(self.expect_identifier()?);
        }
        Ok(ids)
    }

    /// Builds `(keyword items…)`.
    pub(super) fn tagged<const N: usize>(&mut self, keyword: Keyword, items: [NodeId; N]) -> NodeId {
        let head = self.builder.kw(keyword);
        self.builder.list(std::iter::once(head).chain(items))
    }

    /// Appends a span-carrying atom for the current token and advances.
    pub(super) fn push_atom(&mut self, node: Node) -> Result<NodeId, ParseError> {
        let id = self.builder.push(node);
        self.advance()?;
        Ok(id)
    }

    pub(super) fn starts_query(&self) -> bool {
        matches!(
            self.current.as_reserved(),
            Some(Reserved::Select | Reserved::Values | Reserved::With)
        )
    }

    /// Runs `rule` one nesting level deeper, failing once the configured
    /// maximum depth is reached. The level is released even when `rule`
    /// fails.
    pub(super) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::new(
                format!(
                    "Maximum nesting depth of {} exceeded",
                    self.config.max_depth
                ),
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    // ------------------------------------------------------------------
    // Token handling
    // ------------------------------------------------------------------

    /// Advances to the next token, surfacing lexical errors.
    pub(super) fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token();
        self.check_lexical()
    }

    fn check_lexical(&self) -> Result<(), ParseError> {
        match &self.current.kind {
            TokenKind::Error(message) => Err(ParseError::lexical(message.clone(), self.current.span)),
            _ => Ok(()),
        }
    }

    /// Returns the kind of the token `n` positions after the current one.
    pub(super) fn lookahead(&self, n: usize) -> TokenKind {
        let mut lexer = self.lexer.clone();
        let mut kind = self.current.kind.clone();
        for _ in 0..n {
            kind = lexer.next_token().kind;
        }
        kind
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    pub(super) fn check_reserved(&self, word: Reserved) -> bool {
        self.current.as_reserved() == Some(word)
    }

    /// Consumes the current token if it is `kind`.
    pub(super) fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the reserved `word`.
    pub(super) fn eat_reserved(&mut self, word: Reserved) -> Result<bool, ParseError> {
        if self.check_reserved(word) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe("")))
        }
    }

    pub(super) fn expect_reserved(&mut self, word: Reserved) -> Result<(), ParseError> {
        if self.eat_reserved(word)? {
            Ok(())
        } else {
            Err(self.unexpected(word.as_str()))
        }
    }

    /// Consumes an identifier and appends it as an `Id` node.
    pub(super) fn expect_identifier(&mut self) -> Result<NodeId, ParseError> {
        match self.current.kind {
            TokenKind::Identifier { .. } => {
                let span = self.current.span;
                self.push_atom(Node::Id(span))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Text of the current token as written in the source.
    pub(super) fn current_text(&self) -> &'a str {
        self.current.span.slice(self.input)
    }

    /// Builds an error for an unexpected current token.
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        if self.current.is_eof() {
            ParseError::unexpected_eof(expected, self.current.span)
        } else {
            ParseError::unexpected(
                expected,
                self.current.kind.describe(self.current_text()),
                self.current.span,
            )
        }
    }
}
