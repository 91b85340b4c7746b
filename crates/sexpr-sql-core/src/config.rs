//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of expressions and sub-queries.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How decimal integer literals outside the signed 64-bit range are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerOverflow {
    /// Read the literal as a 64-bit float, as SQLite does.
    #[default]
    PromoteToFloat,
    /// Reject the literal with a lexical error.
    Error,
}

/// Settings for a single parse.
///
/// Every field has a default, so a partial JSON document is a valid config:
///
/// ```
/// use sexpr_sql_core::{IntegerOverflow, ParserConfig};
///
/// let config = ParserConfig::from_json(r#"{"integer_overflow": "error"}"#).unwrap();
/// assert_eq!(config.integer_overflow, IntegerOverflow::Error);
/// assert_eq!(config.max_depth, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting of expressions, sub-queries and parenthesised table
    /// references before the parse is rejected.
    pub max_depth: usize,
    /// Policy for integer literals that do not fit in an `i64`.
    pub integer_overflow: IntegerOverflow,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            integer_overflow: IntegerOverflow::default(),
        }
    }
}

impl ParserConfig {
    /// Loads a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or has fields of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the integer overflow policy.
    #[must_use]
    pub const fn with_integer_overflow(mut self, policy: IntegerOverflow) -> Self {
        self.integer_overflow = policy;
        self
    }
}
