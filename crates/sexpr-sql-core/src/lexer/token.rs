//! Token types for the SQL lexer.

use super::Span;

/// Reserved words recognised by the lexer.
///
/// These classify source text only. The tags stored in the tree are
/// [`crate::ast::Keyword`], which fold multi-word constructs such as
/// `GROUP BY` into a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    // Queries
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Offset,
    Distinct,
    All,
    As,
    With,
    Recursive,

    // Joins
    Join,
    Left,
    Inner,
    Outer,
    Cross,
    On,

    // Set operations
    Union,
    Intersect,
    Except,

    // Data manipulation
    Values,
    Insert,
    Into,
    Update,
    Set,
    Delete,

    // Data definition
    Create,
    Drop,
    Table,
    Index,
    View,
    If,
    Unique,
    Primary,
    Key,
    Default,

    // Operators
    Not,
    And,
    Or,
    In,
    Is,
    Between,
    Like,
    Escape,
    Glob,
    Regexp,
    Match,
    Exists,

    // Literals
    Null,
    True,
    False,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,

    // Expressions
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Ordering
    Asc,
    Desc,
}

impl Reserved {
    /// Attempts to parse a reserved word from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        // CURRENT_TIMESTAMP is the longest reserved word.
        if s.len() > 17 {
            return None;
        }
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "AS" => Some(Self::As),
            "WITH" => Some(Self::With),
            "RECURSIVE" => Some(Self::Recursive),
            "JOIN" => Some(Self::Join),
            "LEFT" => Some(Self::Left),
            "INNER" => Some(Self::Inner),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "ON" => Some(Self::On),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "VALUES" => Some(Self::Values),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "TABLE" => Some(Self::Table),
            "INDEX" => Some(Self::Index),
            "VIEW" => Some(Self::View),
            "IF" => Some(Self::If),
            "UNIQUE" => Some(Self::Unique),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "DEFAULT" => Some(Self::Default),
            "NOT" => Some(Self::Not),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "IN" => Some(Self::In),
            "IS" => Some(Self::Is),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "ESCAPE" => Some(Self::Escape),
            "GLOB" => Some(Self::Glob),
            "REGEXP" => Some(Self::Regexp),
            "MATCH" => Some(Self::Match),
            "EXISTS" => Some(Self::Exists),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Returns the reserved word as it is spelled in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::With => "WITH",
            Self::Recursive => "RECURSIVE",
            Self::Join => "JOIN",
            Self::Left => "LEFT",
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Values => "VALUES",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::Index => "INDEX",
            Self::View => "VIEW",
            Self::If => "IF",
            Self::Unique => "UNIQUE",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Default => "DEFAULT",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Escape => "ESCAPE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
            Self::Exists => "EXISTS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The kind of token.
///
/// Tokens never own text. Identifiers, strings and blobs are described by
/// the [`Token::span`] they cover; numbers are parsed while scanning.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// The decimal literal `9223372036854775808`, which is only an integer
    /// when negated.
    MinIntegerMagnitude,
    /// Float literal (e.g., 3.14)
    Float(f64),
    /// String literal; the span covers the text between the quotes.
    String,
    /// Blob literal; the span covers the hex digits between the quotes.
    Blob,

    // Identifiers and keywords
    /// Identifier; for quoted identifiers the span excludes the quotes.
    Identifier {
        /// Whether the identifier was written between quotes.
        quoted: bool,
    },
    /// Reserved word
    Reserved(Reserved),
    /// Bind parameter `?` or `:name`; for a named one the span covers the
    /// name without the colon.
    Parameter {
        /// Whether the parameter has a name.
        named: bool,
    },

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// = or ==
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// End of input
    Eof,
    /// Lexical error with its message
    Error(String),
}

impl TokenKind {
    /// Describes the token for diagnostics, using `text` for tokens whose
    /// content lives in the source.
    #[must_use]
    pub fn describe(&self, text: &str) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::MinIntegerMagnitude => format!("integer {text}"),
            Self::Float(f) => format!("float {f}"),
            Self::String => format!("string '{text}'"),
            Self::Blob => format!("blob X'{text}'"),
            Self::Identifier { .. } => format!("identifier `{text}`"),
            Self::Reserved(word) => format!("keyword {}", word.as_str()),
            Self::Parameter { named: true } => format!("parameter :{text}"),
            Self::Parameter { named: false } => String::from("parameter ?"),
            Self::Eof => String::from("end of input"),
            Self::Error(message) => message.clone(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Returns the spelling of an operator or delimiter token.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Concat => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            _ => "",
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the reserved word if this is a reserved word token.
    #[must_use]
    pub const fn as_reserved(&self) -> Option<Reserved> {
        match &self.kind {
            TokenKind::Reserved(word) => Some(*word),
            _ => None,
        }
    }
}
