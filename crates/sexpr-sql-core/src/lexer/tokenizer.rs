//! SQL Tokenizer implementation.

use super::{Reserved, Span, Token, TokenKind};
use crate::config::IntegerOverflow;

/// Digits of `i64::MIN` without its sign. The literal only fits in an
/// `i64` when negated, so the lexer leaves the decision to the parser.
pub(crate) const MIN_INTEGER_MAGNITUDE: &str = "9223372036854775808";

/// A lexer that tokenizes SQL input.
///
/// The lexer is forward-only and never copies text: every token records the
/// byte range it was read from.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// What to do with decimal integers outside the `i64` range.
    integer_overflow: IntegerOverflow,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            integer_overflow: IntegerOverflow::PromoteToFloat,
        }
    }

    /// Sets the policy for decimal integer literals outside the `i64` range.
    #[must_use]
    pub const fn with_integer_overflow(mut self, policy: IntegerOverflow) -> Self {
        self.integer_overflow = policy;
        self
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    ///
    /// Fails on a block comment that is never closed.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), &'static str> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- to end of line
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* ... */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => return Err("Unterminated block comment"),
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Creates an error token covering the text consumed so far.
    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans an identifier or reserved word.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Reserved::from_str(text) {
            Some(word) => self.make_token(TokenKind::Reserved(word)),
            None => self.make_token(TokenKind::Identifier { quoted: false }),
        }
    }

    /// Scans a named bind parameter (e.g., `:name`). The span covers the
    /// name without the colon.
    fn scan_named_parameter(&mut self) -> Token {
        self.advance(); // :
        let name_start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }
        Token::new(
            TokenKind::Parameter { named: true },
            Span::new(name_start, self.pos),
        )
    }

    /// Consumes text up to and including the closing `quote`, treating a
    /// doubled quote as an escaped one. Returns the span of the body.
    fn scan_quoted_body(&mut self, quote: char) -> Option<Span> {
        self.advance(); // opening quote
        let body_start = self.pos;

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    if self.peek_next() == Some(quote) {
                        self.advance();
                        self.advance();
                    } else {
                        let body = Span::new(body_start, self.pos);
                        self.advance(); // closing quote
                        return Some(body);
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => return None,
            }
        }
    }

    /// Scans a quoted identifier (e.g., "column name" or `column name`).
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        match self.scan_quoted_body(quote) {
            Some(body) if body.is_empty() => self.error("Empty quoted identifier"),
            Some(body) => Token::new(TokenKind::Identifier { quoted: true }, body),
            None => self.error("Unterminated quoted identifier"),
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> Token {
        match self.scan_quoted_body('\'') {
            Some(body) => Token::new(TokenKind::String, body),
            None => self.error("Unterminated string literal"),
        }
    }

    /// Scans a blob literal (X'...' or x'...').
    fn scan_blob(&mut self) -> Token {
        self.advance(); // X/x
        self.advance(); // opening quote
        let body_start = self.pos;

        loop {
            match self.peek() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => {
                    self.advance();
                }
                Some(_) => {
                    while self.peek().is_some_and(|c| c != '\'') {
                        self.advance();
                    }
                    self.advance();
                    return self.error("Invalid character in blob literal");
                }
                None => return self.error("Unterminated blob literal"),
            }
        }

        let body = Span::new(body_start, self.pos);
        self.advance(); // closing quote

        if body.len() % 2 == 1 {
            return self.error("Odd number of hex digits in blob literal");
        }
        Token::new(TokenKind::Blob, body)
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> Token {
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            return self.scan_hex_integer();
        }

        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal point, also for literals like .5
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.skip_word();
                return self.error("Malformed exponent in numeric literal");
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.skip_word();
            return self.error("Invalid numeric literal");
        }

        let text = &self.input[self.start..self.pos];

        if is_float {
            return self.float_token(text);
        }

        match text.parse::<i64>() {
            Ok(i) => self.make_token(TokenKind::Integer(i)),
            Err(_) if text.trim_start_matches('0') == MIN_INTEGER_MAGNITUDE => {
                self.make_token(TokenKind::MinIntegerMagnitude)
            }
            Err(_) => match self.integer_overflow {
                IntegerOverflow::PromoteToFloat => self.float_token(text),
                IntegerOverflow::Error => {
                    self.error(format!("Integer literal out of range: {text}"))
                }
            },
        }
    }

    /// Reads `text` as a float, rejecting values that overflow to infinity.
    fn float_token(&self, text: &str) -> Token {
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
            Ok(_) => self.error(format!("Numeric literal out of range: {text}")),
            Err(e) => self.error(format!("Invalid float: {e}")),
        }
    }

    /// Scans a hexadecimal integer (0x...), read as a 64-bit two's
    /// complement value.
    fn scan_hex_integer(&mut self) -> Token {
        self.advance(); // 0
        self.advance(); // x
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        let digits = &self.input[digits_start..self.pos];

        if digits.is_empty() || self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.skip_word();
            return self.error("Invalid hexadecimal literal");
        }
        if digits.len() > 16 {
            return self.error(format!("Hexadecimal literal too large: 0x{digits}"));
        }

        match u64::from_str_radix(digits, 16) {
            Ok(value) => self.make_token(TokenKind::Integer(i64::from_ne_bytes(
                value.to_ne_bytes(),
            ))),
            Err(e) => self.error(format!("Invalid hexadecimal literal: {e}")),
        }
    }

    /// Consumes the rest of an identifier-like run after a bad literal.
    fn skip_word(&mut self) {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Err(message) = self.skip_whitespace_and_comments() {
            return self.error(message);
        }
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            // String literals
            '\'' => return self.scan_string(),

            // Quoted identifiers
            '"' | '`' => return self.scan_quoted_identifier(c),

            // Blob literals
            'X' | 'x' if self.peek_next() == Some('\'') => return self.scan_blob(),

            // Numbers
            c if c.is_ascii_digit() => return self.scan_number(),
            '.' if self.peek_next().is_some_and(|c| c.is_ascii_digit()) => {
                return self.scan_number();
            }

            // Identifiers and reserved words
            c if c.is_alphabetic() || c == '_' => return self.scan_identifier(),

            // Named bind parameters
            ':' if self.peek_next().is_some_and(|c| c.is_alphabetic() || c == '_') => {
                return self.scan_named_parameter();
            }

            _ => {}
        }

        self.advance();
        match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' => self.make_token(TokenKind::Dot),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '~' => self.make_token(TokenKind::BitNot),
            '&' => self.make_token(TokenKind::BitAnd),
            '?' => self.make_token(TokenKind::Parameter { named: false }),

            // Potentially multi-character tokens
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                }
                self.make_token(TokenKind::Eq)
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                Some('<') => {
                    self.advance();
                    self.make_token(TokenKind::LeftShift)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::RightShift)
                }
                _ => self.make_token(TokenKind::Gt),
            },
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.error("Unexpected character: !")
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }

            _ => self.error(format!("Unexpected character: {c}")),
        }
    }

    /// Tokenizes the entire input and returns all tokens, ending with EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input)
            .iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.span.slice(input))
            .collect()
    }

    fn ident() -> TokenKind {
        TokenKind::Identifier { quoted: false }
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- comment\n/* block\ncomment */ FROM"),
            vec![
                TokenKind::Reserved(Reserved::Select),
                TokenKind::Reserved(Reserved::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("SELECT /* never closed");
        assert!(matches!(&tokens[1].kind, TokenKind::Error(m) if m.contains("comment")));
    }

    #[test]
    fn test_reserved_words_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe"),
            vec![
                TokenKind::Reserved(Reserved::Select),
                TokenKind::Reserved(Reserved::From),
                TokenKind::Reserved(Reserved::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            token_kinds("foo bar_baz _qux count"),
            vec![ident(), ident(), ident(), ident(), TokenKind::Eof]
        );
        assert_eq!(texts("foo bar_baz _qux"), vec!["foo", "bar_baz", "_qux"]);
    }

    #[test]
    fn test_quoted_identifiers_exclude_quotes() {
        let input = "\"column name\" `select` \"a\"\"b\"";
        assert_eq!(
            token_kinds(input),
            vec![
                TokenKind::Identifier { quoted: true },
                TokenKind::Identifier { quoted: true },
                TokenKind::Identifier { quoted: true },
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts(input), vec!["column name", "select", "a\"\"b"]);
    }

    #[test]
    fn test_unterminated_quoted_identifier() {
        assert!(matches!(&token_kinds("\"abc")[0], TokenKind::Error(_)));
        assert!(matches!(&token_kinds("\"\"")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            token_kinds("42 0 123456789"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Integer(0),
                TokenKind::Integer(123_456_789),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            token_kinds("3.25 0.5 1e10 2.5e-3 .5"),
            vec![
                TokenKind::Float(3.25),
                TokenKind::Float(0.5),
                TokenKind::Float(1e10),
                TokenKind::Float(2.5e-3),
                TokenKind::Float(0.5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_hex_integers() {
        assert_eq!(
            token_kinds("0x1F 0xFFFFFFFFFFFFFFFF"),
            vec![
                TokenKind::Integer(31),
                TokenKind::Integer(-1),
                TokenKind::Eof
            ]
        );
        assert!(matches!(
            &token_kinds("0x10000000000000000")[0],
            TokenKind::Error(_)
        ));
        assert!(matches!(&token_kinds("0x")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_integer_overflow_promotes_to_float() {
        assert_eq!(
            token_kinds("9223372036854775809"),
            vec![TokenKind::Float(9.223_372_036_854_776e18), TokenKind::Eof]
        );
        assert_eq!(
            token_kinds("9223372036854775807"),
            vec![TokenKind::Integer(i64::MAX), TokenKind::Eof]
        );
    }

    #[test]
    fn test_integer_overflow_error_policy() {
        let tokens = Lexer::new("9223372036854775809")
            .with_integer_overflow(IntegerOverflow::Error)
            .tokenize();
        assert!(matches!(&tokens[0].kind, TokenKind::Error(m) if m.contains("out of range")));
    }

    #[test]
    fn test_min_integer_magnitude_is_left_to_parser() {
        for policy in [IntegerOverflow::PromoteToFloat, IntegerOverflow::Error] {
            let kinds: Vec<_> = Lexer::new("9223372036854775808 009223372036854775808")
                .with_integer_overflow(policy)
                .tokenize()
                .into_iter()
                .map(|t| t.kind)
                .collect();
            assert_eq!(
                kinds,
                vec![
                    TokenKind::MinIntegerMagnitude,
                    TokenKind::MinIntegerMagnitude,
                    TokenKind::Eof
                ]
            );
        }
    }

    #[test]
    fn test_infinite_floats_rejected() {
        assert!(
            matches!(&token_kinds("1e999")[0], TokenKind::Error(m) if m.contains("out of range"))
        );
        let huge = format!("1{}", "0".repeat(400));
        assert!(matches!(&token_kinds(&huge)[0], TokenKind::Error(_)));
        assert_eq!(token_kinds("1e308")[0], TokenKind::Float(1e308));
    }

    #[test]
    fn test_bind_parameters() {
        let input = "? :name :_x1";
        assert_eq!(
            token_kinds(input),
            vec![
                TokenKind::Parameter { named: false },
                TokenKind::Parameter { named: true },
                TokenKind::Parameter { named: true },
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts(input), vec!["?", "name", "_x1"]);
        assert!(matches!(&token_kinds(": a")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(matches!(&token_kinds("1e")[0], TokenKind::Error(_)));
        assert!(matches!(&token_kinds("1e+")[0], TokenKind::Error(_)));
        assert!(matches!(&token_kinds("12abc")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_strings() {
        let input = "'hello' 'it''s' ''";
        assert_eq!(
            token_kinds(input),
            vec![
                TokenKind::String,
                TokenKind::String,
                TokenKind::String,
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts(input), vec!["hello", "it''s", ""]);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("SELECT 'abc");
        assert!(
            matches!(&tokens[1].kind, TokenKind::Error(m) if m == "Unterminated string literal")
        );
        assert_eq!(tokens[1].span, Span::new(7, 11));
    }

    #[test]
    fn test_blob() {
        let input = "X'48454C4C4F' x''";
        assert_eq!(
            token_kinds(input),
            vec![TokenKind::Blob, TokenKind::Blob, TokenKind::Eof]
        );
        assert_eq!(texts(input), vec!["48454C4C4F", ""]);
    }

    #[test]
    fn test_invalid_blobs() {
        assert!(matches!(&token_kinds("X'ABC'")[0], TokenKind::Error(m) if m.contains("Odd")));
        assert!(matches!(&token_kinds("X'GG'")[0], TokenKind::Error(m) if m.contains("Invalid")));
        assert!(matches!(&token_kinds("X'AB")[0], TokenKind::Error(m) if m.contains("Unterminated")));
    }

    #[test]
    fn test_x_prefixed_identifier_is_not_blob() {
        assert_eq!(token_kinds("xyz"), vec![ident(), TokenKind::Eof]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / % = == != <> < <= > >= || & | ~ << >>"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::BitAnd,
                TokenKind::BitOr,
                TokenKind::BitNot,
                TokenKind::LeftShift,
                TokenKind::RightShift,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) , ; ."),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_characters() {
        assert!(matches!(&token_kinds("#")[0], TokenKind::Error(m) if m == "Unexpected character: #"));
        assert!(matches!(&token_kinds("!")[0], TokenKind::Error(_)));
        assert!(matches!(&token_kinds("[a]")[0], TokenKind::Error(_)));
    }

    #[test]
    fn test_simple_select() {
        let sql = "SELECT id, name FROM users WHERE active = 1";
        assert_eq!(
            token_kinds(sql),
            vec![
                TokenKind::Reserved(Reserved::Select),
                ident(),
                TokenKind::Comma,
                ident(),
                TokenKind::Reserved(Reserved::From),
                ident(),
                TokenKind::Reserved(Reserved::Where),
                ident(),
                TokenKind::Eq,
                TokenKind::Integer(1),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::new(9, 9));
    }

    #[test]
    fn test_qualified_name_tokens() {
        assert_eq!(
            token_kinds("t.a"),
            vec![ident(), TokenKind::Dot, ident(), TokenKind::Eof]
        );
    }
}
