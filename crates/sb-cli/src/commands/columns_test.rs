use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_collect_columns_in_join_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("query.yml");
    fs::write(
        &path,
        r#"
tables:
  - { schema: s, name: a, columns: [id, name] }
  - { schema: s, name: b, alias: bb, columns: [id] }
from: a
joins:
  - { kind: cross, table: bb }
"#,
    )
    .unwrap();

    let args = ColumnsArgs {
        file: path,
        output: ColumnsOutput::Json,
    };
    let rows = collect_columns(&args, &GlobalArgs { verbose: false }).unwrap();
    let names: Vec<String> = rows
        .iter()
        .map(|r| format!("{}.{}", r.table.as_deref().unwrap_or(""), r.name))
        .collect();
    assert_eq!(names, vec!["a.id", "a.name", "bb.id"]);
    assert!(rows.iter().all(|r| !r.nullable));
}

#[test]
fn test_column_row_json_shape() {
    let row = ColumnRow {
        table: Some("a".to_string()),
        name: "id".to_string(),
        nullable: false,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["table"], "a");
    assert_eq!(json["name"], "id");
    assert_eq!(json["nullable"], false);
}
