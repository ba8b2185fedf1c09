//! Statement factories
//!
//! These are the entry points handed a relation by [`ReadableTable`] and
//! [`WritableTable`]. They render only the relation-bearing head of each
//! statement (`SELECT ... FROM <relation>`, `INSERT INTO <table> (...)`,
//! `UPDATE <table>`, `DELETE FROM <table>`); clause bodies are built
//! elsewhere on top of [`Statement::serialize_sql`].
//!
//! [`ReadableTable`]: crate::relation::ReadableTable
//! [`WritableTable`]: crate::relation::WritableTable

use std::sync::Arc;

use crate::buffer::{RenderOptions, SqlBuffer};
use crate::column::Column;
use crate::error::BuildResult;
use crate::logger::{NoopLogger, SqlLogger};
use crate::relation::{Relation, TableExpression};
use crate::table::Table;

/// A renderable SQL statement
pub trait Statement {
    /// Append the statement's SQL to `out`
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()>;

    /// Render with default options and no logging
    fn to_sql(&self) -> BuildResult<String> {
        self.render(RenderOptions::default(), &NoopLogger)
    }

    /// Render with `options`, reporting the SQL to `logger` on success.
    ///
    /// Failed renders are not reported to `logger`.
    fn render(&self, options: RenderOptions, logger: &dyn SqlLogger) -> BuildResult<String> {
        let mut out = SqlBuffer::with_options(options);
        if let Err(e) = self.serialize_sql(&mut out) {
            log::debug!("Failed to render SQL after '{}': {}", out.as_str(), e);
            return Err(e);
        }
        let sql = out.into_string();
        logger.log_sql(&sql);
        Ok(sql)
    }
}

fn write_column_list(out: &mut SqlBuffer, columns: &[Column], qualified: bool) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if qualified {
            column.serialize_sql(out);
        } else {
            out.push_str(column.name());
        }
    }
}

/// `SELECT <projections> FROM <relation>`
#[derive(Debug, Clone)]
pub struct SelectStatement {
    from: Relation,
    projections: Vec<Column>,
}

impl SelectStatement {
    pub fn new(from: Relation, projections: Vec<Column>) -> Self {
        Self { from, projections }
    }

    pub fn from_relation(&self) -> &Relation {
        &self.from
    }

    /// Explicit projections; empty means every column of the relation
    pub fn projections(&self) -> &[Column] {
        &self.projections
    }
}

impl Statement for SelectStatement {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        out.push_keyword("SELECT ");
        if self.projections.is_empty() {
            write_column_list(out, &self.from.columns(), true);
        } else {
            write_column_list(out, &self.projections, true);
        }
        out.push_keyword(" FROM ");
        self.from.serialize_sql(out)
    }
}

/// `INSERT INTO <table> (<columns>)`
#[derive(Debug, Clone)]
pub struct InsertStatement {
    table: Arc<Table>,
    columns: Vec<Column>,
}

impl InsertStatement {
    pub fn new(table: Arc<Table>, columns: Vec<Column>) -> Self {
        Self { table, columns }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Statement for InsertStatement {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        out.push_keyword("INSERT INTO ");
        self.table.serialize_sql(out)?;
        out.push_str(" (");
        if self.columns.is_empty() {
            write_column_list(out, self.table.projections(), false);
        } else {
            write_column_list(out, &self.columns, false);
        }
        out.push_str(")");
        Ok(())
    }
}

/// `UPDATE <table>`
#[derive(Debug, Clone)]
pub struct UpdateStatement {
    table: Arc<Table>,
}

impl UpdateStatement {
    pub fn new(table: Arc<Table>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Statement for UpdateStatement {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        out.push_keyword("UPDATE ");
        self.table.serialize_sql(out)
    }
}

/// `DELETE FROM <table>`
#[derive(Debug, Clone)]
pub struct DeleteStatement {
    table: Arc<Table>,
}

impl DeleteStatement {
    pub fn new(table: Arc<Table>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Statement for DeleteStatement {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        out.push_keyword("DELETE FROM ");
        self.table.serialize_sql(out)
    }
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
