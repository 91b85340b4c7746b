#![allow(dead_code)]

use sexpr_sql_core::{parse as parse_sql, ParseError, SqlTree};

pub fn parse(sql: &str) -> SqlTree {
    parse_sql(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_sql(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Renders the tree of `sql` as an S-expression.
pub fn sexpr(sql: &str) -> String {
    parse(sql).to_string()
}

/// Renders the first result column of `SELECT <expr>`.
pub fn expr(sql: &str) -> String {
    let tree = parse(&format!("SELECT {sql}"));
    let column = tree
        .root()
        .child(1)
        .and_then(|columns| columns.child(0))
        .unwrap_or_else(|| panic!("No result column in: {sql}"));
    column.to_string()
}
