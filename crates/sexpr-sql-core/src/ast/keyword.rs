//! Keyword tags stored in the tree.

use serde::{Deserialize, Serialize};

/// Keyword tags.
///
/// A tag marks the meaning of the list it heads (`(Where …)`, `(Eq a b)`)
/// or stands alone as a modifier or constant (`Distinct`, `Null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // Clauses
    Select,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
    Join,
    Left,
    Inner,
    On,
    Union,
    UnionAll,
    Except,
    Intersect,
    Values,
    ColumnNames,
    As,
    With,
    Recursive,

    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    Is,
    In,
    InQuery,
    Between,
    Like,
    Glob,
    Regexp,
    Match,

    // Logical
    And,
    Or,
    Not,

    // Arithmetic and bitwise
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Lsh,
    Rsh,
    Concat,
    BitAnd,
    BitOr,
    BitNot,

    // Control expressions
    Case,
    Else,
    Exists,
    ScalarSubquery,
    Cast,

    // Functions and aggregates
    Function,
    AggregateFunction,
    Count,
    CountStar,
    Avg,
    Sum,
    Min,
    Max,
    Total,
    GroupConcat,

    // Qualifiers and constants
    Asc,
    Desc,
    Distinct,
    All,
    True,
    False,
    Null,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Parameter,
    Type,

    // Statements
    Insert,
    Delete,
    Update,
    CreateIndex,
    DropIndex,
    CreateView,
    DropView,
    IfExists,
    CreateTable,
    DropTable,

    // Column and table constraints
    PrimaryKey,
    Unique,
    Default,
}

impl Keyword {
    /// Returns the tag name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::From => "From",
            Self::Where => "Where",
            Self::GroupBy => "GroupBy",
            Self::Having => "Having",
            Self::OrderBy => "OrderBy",
            Self::Limit => "Limit",
            Self::Offset => "Offset",
            Self::Join => "Join",
            Self::Left => "Left",
            Self::Inner => "Inner",
            Self::On => "On",
            Self::Union => "Union",
            Self::UnionAll => "UnionAll",
            Self::Except => "Except",
            Self::Intersect => "Intersect",
            Self::Values => "Values",
            Self::ColumnNames => "ColumnNames",
            Self::As => "As",
            Self::With => "With",
            Self::Recursive => "Recursive",
            Self::Lt => "Lt",
            Self::Le => "Le",
            Self::Gt => "Gt",
            Self::Ge => "Ge",
            Self::Eq => "Eq",
            Self::Ne => "Ne",
            Self::Is => "Is",
            Self::In => "In",
            Self::InQuery => "InQuery",
            Self::Between => "Between",
            Self::Like => "Like",
            Self::Glob => "Glob",
            Self::Regexp => "Regexp",
            Self::Match => "Match",
            Self::And => "And",
            Self::Or => "Or",
            Self::Not => "Not",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Mod => "Mod",
            Self::Lsh => "Lsh",
            Self::Rsh => "Rsh",
            Self::Concat => "Concat",
            Self::BitAnd => "BitAnd",
            Self::BitOr => "BitOr",
            Self::BitNot => "BitNot",
            Self::Case => "Case",
            Self::Else => "Else",
            Self::Exists => "Exists",
            Self::ScalarSubquery => "ScalarSubquery",
            Self::Cast => "Cast",
            Self::Function => "Function",
            Self::AggregateFunction => "AggregateFunction",
            Self::Count => "Count",
            Self::CountStar => "CountStar",
            Self::Avg => "Avg",
            Self::Sum => "Sum",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Total => "Total",
            Self::GroupConcat => "GroupConcat",
            Self::Asc => "Asc",
            Self::Desc => "Desc",
            Self::Distinct => "Distinct",
            Self::All => "All",
            Self::True => "True",
            Self::False => "False",
            Self::Null => "Null",
            Self::CurrentDate => "CurrentDate",
            Self::CurrentTime => "CurrentTime",
            Self::CurrentTimestamp => "CurrentTimestamp",
            Self::Parameter => "Parameter",
            Self::Type => "Type",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
            Self::Update => "Update",
            Self::CreateIndex => "CreateIndex",
            Self::DropIndex => "DropIndex",
            Self::CreateView => "CreateView",
            Self::DropView => "DropView",
            Self::IfExists => "IfExists",
            Self::CreateTable => "CreateTable",
            Self::DropTable => "DropTable",
            Self::PrimaryKey => "PrimaryKey",
            Self::Unique => "Unique",
            Self::Default => "Default",
        }
    }

    /// Looks up an aggregate function by name (case-insensitive).
    #[must_use]
    pub fn aggregate(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "count" => Some(Self::Count),
            "avg" => Some(Self::Avg),
            "sum" => Some(Self::Sum),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "total" => Some(Self::Total),
            "group_concat" => Some(Self::GroupConcat),
            _ => None,
        }
    }

    /// Returns true for the tags that head a complete statement.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::With
                | Self::Values
                | Self::Union
                | Self::UnionAll
                | Self::Except
                | Self::Intersect
                | Self::Insert
                | Self::Update
                | Self::Delete
                | Self::CreateTable
                | Self::DropTable
                | Self::CreateIndex
                | Self::DropIndex
                | Self::CreateView
                | Self::DropView
        )
    }
}

impl core::fmt::Display for Keyword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
