//! Tests for SELECT statements: result columns, FROM, joins, clauses,
//! compound queries and VALUES.

mod common;
use common::*;

use sexpr_sql_core::Keyword;

#[test]
fn select_literal() {
    let tree = parse("SELECT 1");
    let root = tree.root();
    assert_eq!(root.head_keyword(), Some(Keyword::Select));
    let columns = root.child(1).unwrap();
    assert!(columns.is_list());
    assert_eq!(columns.len(), 1);
    assert_eq!(columns.child(0).unwrap().as_integer(), Some(1));
    assert_eq!(tree.to_string(), "(:Select (1))");
}

#[test]
fn select_star_with_where() {
    let tree = parse("SELECT * FROM t WHERE a = 1");
    let root = tree.root();
    let from = root.child(2).unwrap();
    assert_eq!(from.head_keyword(), Some(Keyword::From));
    assert_eq!(from.child(1).unwrap().text(), Some("t"));

    let condition = root.child(3).unwrap().child(1).unwrap();
    assert_eq!(condition.head_keyword(), Some(Keyword::Eq));
    assert_eq!(condition.child(1).unwrap().text(), Some("a"));
    assert_eq!(condition.child(2).unwrap().as_integer(), Some(1));
}

#[test]
fn select_distinct_and_all() {
    assert_eq!(sexpr("SELECT DISTINCT a FROM t"), "(:Select :Distinct (a) (:From t))");
    assert_eq!(sexpr("SELECT ALL a FROM t"), "(:Select :All (a) (:From t))");
}

#[test]
fn select_column_aliases() {
    assert_eq!(
        sexpr("SELECT a AS x, b y, 1 + 2 AS \"total\" FROM t"),
        "(:Select ((:As a x) (:As b y) (:As (:Plus 1 2) total)) (:From t))"
    );
}

#[test]
fn select_qualified_star() {
    assert_eq!(
        sexpr("SELECT t.*, u.id FROM t, u"),
        "(:Select ((:Mul t) (u id)) (:From t u))"
    );
}

#[test]
fn select_without_from() {
    assert_eq!(sexpr("SELECT 1 + 1"), "(:Select ((:Plus 1 1)))");
}

#[test]
fn select_table_alias_and_schema() {
    assert_eq!(
        sexpr("SELECT * FROM main.users AS u"),
        "(:Select (:Mul) (:From (:As (main users) u)))"
    );
    assert_eq!(sexpr("SELECT * FROM users u"), "(:Select (:Mul) (:From (:As users u)))");
}

#[test]
fn select_inner_join() {
    assert_eq!(
        sexpr("SELECT * FROM a JOIN b ON a.id = b.a_id"),
        "(:Select (:Mul) (:From (:Join :Inner a b (:On (:Eq (a id) (b a_id))))))"
    );
    assert_eq!(
        sexpr("SELECT * FROM a INNER JOIN b ON x"),
        "(:Select (:Mul) (:From (:Join :Inner a b (:On x))))"
    );
}

#[test]
fn select_joins_nest_left() {
    assert_eq!(
        sexpr("SELECT * FROM a LEFT JOIN b ON p JOIN c ON q"),
        "(:Select (:Mul) (:From (:Join :Inner (:Join :Left a b (:On p)) c (:On q))))"
    );
}

#[test]
fn select_subquery_in_from() {
    assert_eq!(
        sexpr("SELECT x FROM (SELECT 1 AS x) AS s"),
        "(:Select (x) (:From (:As (:Select ((:As 1 x))) s)))"
    );
}

#[test]
fn select_nested_parenthesised_join() {
    assert_eq!(
        sexpr("SELECT * FROM ((a JOIN b) AS j)"),
        "(:Select (:Mul) (:From (:As (:Join :Inner a b) j)))"
    );
}

#[test]
fn with_common_table_expressions() {
    let tree = parse("WITH r (n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT n FROM r");
    let root = tree.root();
    assert_eq!(root.head_keyword(), Some(Keyword::With));
    let tables = root.child(1).unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables.child(0).unwrap().child(0).unwrap().text(), Some("r"));
    assert_eq!(
        tree.to_string(),
        "(:With ((r (:ColumnNames n) (:UnionAll (:Select (1)) \
         (:Select ((:Plus n 1)) (:From r))))) (:Select (n) (:From r)))"
    );
}

#[test]
fn with_recursive_keeps_trailing_clauses_on_body() {
    assert_eq!(
        sexpr("WITH RECURSIVE a AS (SELECT 1), b AS (SELECT 2) SELECT * FROM a, b ORDER BY 1 LIMIT 2"),
        "(:With :Recursive ((a (:Select (1))) (b (:Select (2)))) \
         (:Select (:Mul) (:From a b) (:OrderBy 1) (:Limit 2)))"
    );
}

#[test]
fn with_feeds_insert_and_view() {
    assert_eq!(
        sexpr("INSERT INTO t WITH s AS (SELECT 1) SELECT * FROM s"),
        "(:Insert t (:With ((s (:Select (1)))) (:Select (:Mul) (:From s))))"
    );
    assert_eq!(
        sexpr("CREATE VIEW v AS WITH s AS (VALUES (1)) SELECT * FROM s"),
        "(:CreateView v (:With ((s (:Values (1)))) (:Select (:Mul) (:From s))))"
    );
}

#[test]
fn select_group_by_having() {
    assert_eq!(
        sexpr("SELECT a, COUNT(*) FROM t GROUP BY a HAVING COUNT(*) > 1"),
        "(:Select (a (:AggregateFunction :CountStar ())) (:From t) (:GroupBy a) \
         (:Having (:Gt (:AggregateFunction :CountStar ()) 1)))"
    );
}

#[test]
fn select_order_by_directions() {
    assert_eq!(
        sexpr("SELECT a FROM t ORDER BY a, b ASC, c DESC"),
        "(:Select (a) (:From t) (:OrderBy a (:Asc b) (:Desc c)))"
    );
}

#[test]
fn select_limit_offset() {
    assert_eq!(
        sexpr("SELECT a FROM t LIMIT 10 OFFSET 5"),
        "(:Select (a) (:From t) (:Limit 10) (:Offset 5))"
    );
    assert_eq!(
        sexpr("SELECT a FROM t LIMIT 5, 10"),
        "(:Select (a) (:From t) (:Limit 10) (:Offset 5))"
    );
}

#[test]
fn compound_operators() {
    assert_eq!(
        sexpr("SELECT 1 UNION SELECT 2"),
        "(:Union (:Select (1)) (:Select (2)))"
    );
    assert_eq!(
        sexpr("SELECT 1 EXCEPT SELECT 2"),
        "(:Except (:Select (1)) (:Select (2)))"
    );
    assert_eq!(
        sexpr("SELECT 1 INTERSECT SELECT 2"),
        "(:Intersect (:Select (1)) (:Select (2)))"
    );
}

#[test]
fn compound_chain_is_left_nested() {
    assert_eq!(
        sexpr("SELECT 1 UNION ALL SELECT 2 UNION SELECT 3 ORDER BY 1"),
        "(:Union (:UnionAll (:Select (1)) (:Select (2))) (:Select (3)) (:OrderBy 1))"
    );
}

#[test]
fn values_query() {
    assert_eq!(sexpr("VALUES (1, 2), (3, 4)"), "(:Values (1 2) (3 4))");
    assert_eq!(
        sexpr("VALUES (1) UNION SELECT 2"),
        "(:Union (:Values (1)) (:Select (2)))"
    );
}

#[test]
fn absent_clauses_are_omitted() {
    let tree = parse("SELECT a FROM t");
    assert_eq!(tree.root().len(), 3);
}
