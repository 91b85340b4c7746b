//! Properties of the produced trees: determinism, source offsets, arena
//! shape and the serialized export.

mod common;
use common::*;

use std::sync::Arc;

use serde_json::json;
use sexpr_sql_core::{
    parse_statements, parse_with_config, Keyword, Node, NodeRef, ParserConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

const QUERIES: &[&str] = &[
    "SELECT a, b AS c FROM t JOIN u ON t.id = u.id WHERE a > 1 ORDER BY b DESC LIMIT 3",
    "INSERT INTO t (a, b) VALUES (1, 'x'), (2, X'00')",
    "UPDATE t SET a = CASE WHEN b THEN 1 ELSE 2 END",
    "CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
    "SELECT count(*) FROM t GROUP BY a HAVING sum(b) > 10 UNION SELECT 1",
    "WITH RECURSIVE c (n) AS (VALUES (1)) SELECT n, :p, ? FROM c WHERE n GLOB 'x'",
];

#[test]
fn parsing_is_deterministic() {
    init_tracing();
    for sql in QUERIES {
        let first = parse(sql);
        let second = parse(sql);
        assert_eq!(first, second, "trees differ for {sql}");
        assert_eq!(first.to_string(), second.to_string());
    }
}

fn assert_spans_match(node: NodeRef<'_>, sql: &str) {
    if let Some(span) = node.span() {
        assert!(span.start <= span.end && span.end <= sql.len());
        assert_eq!(node.text(), Some(&sql[span.start..span.end]));
    }
    for child in node.children() {
        assert_spans_match(child, sql);
    }
}

#[test]
fn spans_slice_back_to_source_text() {
    for sql in QUERIES {
        let tree = parse(sql);
        assert_spans_match(tree.root(), sql);
    }
}

#[test]
fn root_is_a_statement_list_built_last() {
    for sql in QUERIES {
        let tree = parse(sql);
        let root = tree.root();
        assert!(root.is_list());
        assert!(root.head_keyword().is_some_and(|k| k.is_statement()));
        assert_eq!(root.id().index(), tree.len() - 1);
    }
}

#[test]
fn children_iterate_in_order_both_ways() {
    let tree = parse("SELECT 1, 2, 3");
    let columns = tree.root().child(1).unwrap();
    let forward: Vec<_> = columns.children().filter_map(|c| c.as_integer()).collect();
    let backward: Vec<_> = columns
        .children()
        .rev()
        .filter_map(|c| c.as_integer())
        .collect();
    assert_eq!(forward, [1, 2, 3]);
    assert_eq!(backward, [3, 2, 1]);
    assert_eq!(columns.children().len(), 3);
    assert!(columns.child(3).is_none());
}

#[test]
fn atoms_have_no_children() {
    let tree = parse("SELECT a");
    let atom = tree.root().child(1).unwrap().child(0).unwrap();
    assert!(!atom.is_list());
    assert!(atom.is_empty());
    assert_eq!(atom.children().count(), 0);
    assert!(atom.head_keyword().is_none());
}

#[test]
fn tree_keeps_source_alive() {
    let tree = {
        let sql = String::from("SELECT name FROM users");
        parse(&sql)
    };
    let column = tree.root().child(1).unwrap().child(0).unwrap();
    assert_eq!(column.text(), Some("name"));
    assert_eq!(tree.source(), "SELECT name FROM users");
}

#[test]
fn script_trees_share_source() {
    init_tracing();
    let trees = parse_statements("CREATE TABLE t (a INT); INSERT INTO t VALUES (1); SELECT a FROM t;")
        .unwrap();
    let heads: Vec<_> = trees.iter().map(|t| t.root().head_keyword()).collect();
    assert_eq!(
        heads,
        [
            Some(Keyword::CreateTable),
            Some(Keyword::Insert),
            Some(Keyword::Select)
        ]
    );
    assert!(trees
        .windows(2)
        .all(|w| Arc::ptr_eq(w[0].shared_source(), w[1].shared_source())));
    let select = trees[2].root();
    let column = select.child(1).unwrap().child(0).unwrap();
    assert_eq!(column.text(), Some("a"));
    assert_eq!(column.span().unwrap().start, 57);
}

#[test]
fn json_export_uses_tagged_variants() {
    let tree = parse("SELECT a, 1.5, 'x', X'FF', NULL FROM t");
    let value = tree.to_json().unwrap();
    assert_eq!(
        value,
        json!({"List": [
            {"KW": "Select"},
            {"List": [
                {"Id": {"start": 7, "end": 8}},
                {"Float": 1.5},
                {"String": {"start": 16, "end": 17}},
                {"Binary": {"start": 22, "end": 24}},
                {"KW": "Null"}
            ]},
            {"List": [
                {"KW": "From"},
                {"Id": {"start": 37, "end": 38}}
            ]}
        ]})
    );
}

#[test]
fn json_export_of_integer() {
    let value = parse("SELECT 7").to_json().unwrap();
    assert_eq!(value["List"][1]["List"][0], json!({"Integer": 7}));
}

#[test]
fn config_loaded_from_json() {
    let config = ParserConfig::from_json(r#"{"max_depth": 4}"#).unwrap();
    assert!(parse_with_config("SELECT 1 + 2", &config).is_ok());
    let err = parse_with_config("SELECT ((((1))))", &config).unwrap_err();
    assert!(err.message.contains("nesting depth"));
}

#[test]
fn nodes_view_matches_node_refs() {
    let tree = parse("SELECT 1");
    assert_eq!(tree.nodes().len(), tree.len());
    assert!(matches!(tree.nodes().last(), Some(Node::List(_))));
    assert_eq!(tree.root().node(), *tree.nodes().last().unwrap());
}
