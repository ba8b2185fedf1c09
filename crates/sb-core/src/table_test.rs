use super::*;
use crate::buffer::{KeywordCase, RenderOptions};

fn orders() -> Table {
    Table::new(
        "shop",
        "orders",
        vec![
            Column::new("id"),
            Column::new("customer_id"),
            Column::nullable("shipped_at"),
        ],
    )
    .unwrap()
}

fn simple() -> Table {
    Table::new("s", "t", vec![Column::new("id")]).unwrap()
}

#[test]
fn test_columns_in_declaration_order() {
    let table = orders();
    let names: Vec<String> = table
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, vec!["id", "customer_id", "shipped_at"]);
    assert_eq!(table.projections().len(), 3);
}

#[test]
fn test_columns_are_bound_to_table_name() {
    let table = orders();
    for column in table.columns() {
        assert_eq!(column.table_name(), Some("orders"));
    }
}

#[test]
fn test_preexisting_binding_is_replaced() {
    let table = Table::new("s", "t", vec![Column::new("id").bound_to("other")]).unwrap();
    assert_eq!(table.columns()[0].table_name(), Some("t"));
}

#[test]
fn test_empty_columns_rejected() {
    let err = Table::new("s", "t", vec![]).unwrap_err();
    assert!(matches!(err, BuildError::EmptyColumns { ref table } if table == "t"));
    assert!(err.to_string().contains("[B001]"));
}

#[test]
fn test_invalid_table_name_rejected() {
    let err = Table::new("s", "t;drop", vec![Column::new("id")]).unwrap_err();
    assert!(matches!(err, BuildError::InvalidTableName { .. }));
}

#[test]
fn test_duplicate_columns_last_write_wins() {
    let table = Table::new(
        "s",
        "t",
        vec![
            Column::new("id"),
            Column::new("name"),
            Column::nullable("id"),
        ],
    )
    .unwrap();

    assert_eq!(table.columns().len(), 3);
    let found = table.lookup_column("id").unwrap();
    assert!(found.is_nullable(), "expected the last-declared 'id'");
}

#[test]
fn test_lookup_column() {
    let table = orders();
    let col = table.lookup_column("customer_id").unwrap();
    assert_eq!(col.name(), "customer_id");
    assert_eq!(col.table_name(), Some("orders"));
}

#[test]
fn test_lookup_missing_column() {
    let err = orders().lookup_column("nope").unwrap_err();
    match err {
        BuildError::NoSuchColumn { column, table } => {
            assert_eq!(column, "nope");
            assert_eq!(table, "orders");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ad_hoc_column_does_not_touch_lookup() {
    let table = orders();
    let col = table.column("total");
    assert_eq!(col.table_name(), Some("orders"));
    assert!(table.lookup_column("total").is_err());
}

#[test]
fn test_serialize_plain() {
    assert_eq!(simple().to_sql().unwrap(), "s.t");
}

#[test]
fn test_serialize_with_alias() {
    assert_eq!(simple().with_alias("a").to_sql().unwrap(), "s.t AS a");
}

#[test]
fn test_serialize_with_forced_index() {
    assert_eq!(
        simple().with_forced_index("idx").to_sql().unwrap(),
        "s.t FORCE INDEX (idx)"
    );
}

#[test]
fn test_serialize_with_alias_and_forced_index() {
    let table = simple().with_alias("a").with_forced_index("idx");
    assert_eq!(table.to_sql().unwrap(), "s.t AS a FORCE INDEX (idx)");
}

#[test]
fn test_serialize_lowercase_keywords() {
    let table = simple().with_alias("a").with_forced_index("idx");
    let sql = table
        .to_sql_with(RenderOptions {
            keyword_case: KeywordCase::Lower,
        })
        .unwrap();
    assert_eq!(sql, "s.t as a force index (idx)");
}

#[test]
fn test_forced_index_copy_is_independent() {
    let original = simple();
    let forced = original.with_forced_index("idx");
    assert_eq!(original.to_sql().unwrap(), "s.t");
    assert_eq!(original.forced_index(), None);
    assert_eq!(forced.forced_index(), Some("idx"));
    assert_eq!(forced.columns(), original.columns());
}

#[test]
fn test_alias_rebinds_columns_on_copy_only() {
    let original = orders();
    let aliased = original.with_alias("o");

    assert_eq!(aliased.binding_name(), "o");
    assert!(aliased.columns().iter().all(|c| c.table_name() == Some("o")));
    assert_eq!(aliased.lookup_column("id").unwrap().table_name(), Some("o"));
    assert_eq!(aliased.column("total").table_name(), Some("o"));

    assert_eq!(original.alias(), None);
    assert!(original
        .columns()
        .iter()
        .all(|c| c.table_name() == Some("orders")));
}

#[test]
fn test_empty_alias_clears() {
    let table = simple().with_alias("a").with_alias("");
    assert_eq!(table.alias(), None);
    assert_eq!(table.binding_name(), "t");
    assert_eq!(table.to_sql().unwrap(), "s.t");
}

#[test]
fn test_invalid_schema_fails_serialize() {
    let table = Table::new("s;", "t", vec![Column::new("id")]).unwrap();
    let mut out = SqlBuffer::new();
    let err = table.serialize_sql(&mut out).unwrap_err();
    assert!(matches!(err, BuildError::InvalidSchemaName { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_empty_schema_fails_serialize() {
    let table = Table::new("", "t", vec![Column::new("id")]).unwrap();
    assert!(table.to_sql().is_err());
}

#[test]
fn test_invalid_forced_index_fails_serialize() {
    let table = simple().with_forced_index("idx; DROP TABLE t");
    let mut out = SqlBuffer::new();
    let err = table.serialize_sql(&mut out).unwrap_err();
    assert!(matches!(err, BuildError::InvalidIndexName { .. }));
    // Partial output is kept
    assert_eq!(out.as_str(), "s.t");
}

#[test]
fn test_accessors() {
    let table = orders();
    assert_eq!(table.schema_name(), "shop");
    assert_eq!(table.name(), "orders");
    assert_eq!(table.binding_name(), "orders");
}

#[test]
fn test_ad_hoc_column_follows_alias() {
    let table = orders().with_alias("o");
    let mut out = SqlBuffer::new();
    table.column("total").serialize_sql(&mut out);
    assert_eq!(out.as_str(), "o.total");
}
