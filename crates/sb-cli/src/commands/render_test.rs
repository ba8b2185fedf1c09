use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const DEFINITION: &str = r#"
tables:
  - schema: hr
    name: employees
    alias: e
    columns: [id, dept_id, name]
  - schema: hr
    name: departments
    alias: d
    columns: [id, title]
from: e
joins:
  - kind: inner
    table: d
    on: [[e.dept_id, d.id]]
select: [e.name, d.title]
"#;

fn write_definition(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("query.yml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn global() -> GlobalArgs {
    GlobalArgs { verbose: false }
}

#[test]
fn test_render_select() {
    let (_dir, path) = write_definition(DEFINITION);
    let args = RenderArgs {
        file: path,
        keyword_case: None,
        relation_only: false,
    };
    let sql = render_sql(&args, &global()).unwrap();
    assert_eq!(
        sql,
        "SELECT e.name, d.title FROM hr.employees AS e JOIN hr.departments AS d ON e.dept_id = d.id"
    );
}

#[test]
fn test_render_relation_only_lowercase() {
    let (_dir, path) = write_definition(DEFINITION);
    let args = RenderArgs {
        file: path,
        keyword_case: Some(CaseArg::Lower),
        relation_only: true,
    };
    let sql = render_sql(&args, &global()).unwrap();
    assert_eq!(
        sql,
        "hr.employees as e join hr.departments as d on e.dept_id = d.id"
    );
}

#[test]
fn test_render_missing_file() {
    let dir = tempdir().unwrap();
    let args = RenderArgs {
        file: dir.path().join("missing.yml"),
        keyword_case: None,
        relation_only: false,
    };
    let err = render_sql(&args, &global()).unwrap_err();
    assert!(format!("{err:#}").contains("[B009]"), "{err:#}");
}

#[test]
fn test_render_invalid_schema() {
    let (_dir, path) = write_definition(
        r#"
tables:
  - { schema: "hr;", name: employees, columns: [id] }
from: employees
"#,
    );
    let args = RenderArgs {
        file: path,
        keyword_case: None,
        relation_only: true,
    };
    let err = render_sql(&args, &global()).unwrap_err();
    assert!(format!("{err:#}").contains("[B007]"), "{err:#}");
}
