//! Parser error types.

use crate::lexer::Span;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unterminated literal, or an unknown character.
    Lexical,
    /// Unexpected token, missing clause or delimiter.
    Syntax,
}

impl ErrorKind {
    /// Returns a lowercase label for diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
        }
    }
}

/// A parse error. The first error aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", span.start, span.end)]
pub struct ParseError {
    /// Lexical or syntax error.
    pub kind: ErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// Description of the token found (if applicable).
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            ..Self::new(message, span)
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        let found: String = found.into();
        Self {
            kind: ErrorKind::Syntax,
            message: format!("Unexpected token: expected {expected}, found {found}"),
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            kind: ErrorKind::Syntax,
            message: format!("Unexpected end of input: expected {expected}"),
            span,
            expected: Some(expected),
            found: Some(String::from("end of input")),
        }
    }

    /// Returns the 1-based line and column of the error start in `source`.
    #[must_use]
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let start = floor_char_boundary(source, self.span.start);
        let before = &source[..start];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = source[line_start..start].chars().count() + 1;
        (line, column)
    }

    /// Renders the error with the offending source line and a caret
    /// underline:
    ///
    /// ```text
    /// syntax error: Unexpected end of input: expected expression
    ///  --> 1:11
    ///   |
    /// 1 | SELECT 1 +
    ///   |           ^
    /// ```
    #[must_use]
    pub fn annotate(&self, source: &str) -> String {
        let (line, column) = self.line_col(source);
        let line_text = source.lines().nth(line - 1).unwrap_or_default();
        let gutter = line.to_string().len();
        let line_chars = line_text.chars().count();
        let width = source
            .get(self.span.start..self.span.end)
            .map_or(1, |text| text.chars().count())
            .clamp(1, line_chars.saturating_sub(column - 1).max(1));

        let underline = format!(
            "{:gutter$} | {:pad$}{}",
            "",
            "",
            "^".repeat(width),
            pad = column - 1
        );
        [
            format!("{} error: {}", self.kind.as_str(), self.message),
            format!("{:gutter$}--> {line}:{column}", ""),
            format!("{:gutter$} |", ""),
            format!("{line} | {line_text}"),
            underline,
        ]
        .join("\n")
    }
}

fn floor_char_boundary(source: &str, index: usize) -> usize {
    let mut index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::unexpected_eof("expression", Span::new(10, 10));
        assert_eq!(
            err.to_string(),
            "Unexpected end of input: expected expression at position 10..10"
        );
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.found.as_deref(), Some("end of input"));
    }

    #[test]
    fn test_lexical_kind() {
        let err = ParseError::lexical("Unterminated string literal", Span::new(7, 11));
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert!(err.expected.is_none());
    }

    #[test]
    fn test_line_col() {
        let source = "SELECT a\nFROM t\nWHERE ?";
        let err = ParseError::new("bad", Span::new(22, 23));
        assert_eq!(err.line_col(source), (3, 7));
    }

    #[test]
    fn test_annotate_end_of_input() {
        let source = "SELECT 1 +";
        let err = ParseError::unexpected_eof("expression", Span::new(10, 10));
        let expected = [
            String::from("syntax error: Unexpected end of input: expected expression"),
            String::from(" --> 1:11"),
            String::from("  |"),
            String::from("1 | SELECT 1 +"),
            format!("  |{}^", " ".repeat(11)),
        ]
        .join("\n");
        assert_eq!(err.annotate(source), expected);
    }

    #[test]
    fn test_annotate_has_five_lines() {
        let source = "SELECT a\nFROM";
        let err = ParseError::unexpected_eof("identifier", Span::new(13, 13));
        let rendered = err.annotate(source);
        assert_eq!(rendered.lines().count(), 5);
        assert!(!rendered.ends_with('\n'));
        assert!(rendered.contains(" --> 2:5\n"));
    }

    #[test]
    fn test_annotate_underlines_token() {
        let source = "SELECT *\nFROM 'users'";
        let err = ParseError::unexpected("identifier", "string 'users'", Span::new(15, 20));
        let rendered = err.annotate(source);
        let expected_tail = format!("2 | FROM 'users'\n  |{}^^^^^", " ".repeat(7));
        assert!(rendered.ends_with(&expected_tail));
    }
}
