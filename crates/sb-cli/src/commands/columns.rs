//! Columns command implementation

use anyhow::Result;
use sb_core::TableExpression;
use serde::Serialize;

use crate::cli::{ColumnsArgs, ColumnsOutput, GlobalArgs};
use crate::commands::common::load_definition;

/// A column row in JSON output
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ColumnRow {
    pub table: Option<String>,
    pub name: String,
    pub nullable: bool,
}

/// Execute the columns command
pub(crate) fn execute(args: &ColumnsArgs, global: &GlobalArgs) -> Result<()> {
    let rows = collect_columns(args, global)?;

    match args.output {
        ColumnsOutput::Text => {
            for row in &rows {
                match &row.table {
                    Some(table) => println!("{}.{}", table, row.name),
                    None => println!("{}", row.name),
                }
            }
        }
        ColumnsOutput::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

/// Columns of the definition's root relation, in relation order
pub(crate) fn collect_columns(args: &ColumnsArgs, global: &GlobalArgs) -> Result<Vec<ColumnRow>> {
    let def = load_definition(&args.file, global.verbose)?;
    let relation = def.build_relation()?;

    Ok(relation
        .columns()
        .into_iter()
        .map(|c| ColumnRow {
            table: c.table_name().map(str::to_string),
            name: c.name().to_string(),
            nullable: c.is_nullable(),
        })
        .collect())
}

#[cfg(test)]
#[path = "columns_test.rs"]
mod tests;
