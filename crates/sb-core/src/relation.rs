//! Relation capability contracts
//!
//! [`TableExpression`] is what every composable relation provides: names,
//! columns, and serialization. [`ReadableTable`] adds the SELECT and join
//! factories; [`WritableTable`] adds INSERT/UPDATE/DELETE and is only
//! implemented by physical tables. [`Relation`] is the closed set of
//! relation kinds passed around by value.

use std::sync::Arc;

use crate::buffer::{RenderOptions, SqlBuffer};
use crate::column::Column;
use crate::error::BuildResult;
use crate::expression::Condition;
use crate::join::{self, JoinTable};
use crate::statement::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};
use crate::table::Table;

/// A table-like SQL source
pub trait TableExpression {
    /// Schema the relation lives in; empty for joins
    fn schema_name(&self) -> &str;

    /// Relation name; empty for joins
    fn name(&self) -> &str;

    /// Columns exposed by the relation, in order
    fn columns(&self) -> Vec<Column>;

    /// Append this relation's SQL to `out`.
    ///
    /// On error, whatever was written before the failure stays in `out`.
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()>;

    /// Serialize with default options
    fn to_sql(&self) -> BuildResult<String> {
        self.to_sql_with(RenderOptions::default())
    }

    /// Serialize into a fresh buffer with `options`
    fn to_sql_with(&self, options: RenderOptions) -> BuildResult<String> {
        let mut out = SqlBuffer::with_options(options);
        self.serialize_sql(&mut out)?;
        Ok(out.into_string())
    }
}

/// Relations that can be selected from and joined
pub trait ReadableTable: TableExpression {
    /// This relation as a shareable [`Relation`] value
    fn to_relation(&self) -> Relation;

    /// Start a SELECT over this relation. An empty projection list selects
    /// every column.
    fn select(&self, projections: Vec<Column>) -> SelectStatement {
        SelectStatement::new(self.to_relation(), projections)
    }

    fn inner_join(&self, rhs: impl Into<Relation>, on: impl Into<Condition>) -> Relation
    where
        Self: Sized,
    {
        join::inner_join(self.to_relation(), rhs, Some(on.into()))
    }

    fn left_join(&self, rhs: impl Into<Relation>, on: impl Into<Condition>) -> Relation
    where
        Self: Sized,
    {
        join::left_join(self.to_relation(), rhs, Some(on.into()))
    }

    fn right_join(&self, rhs: impl Into<Relation>, on: impl Into<Condition>) -> Relation
    where
        Self: Sized,
    {
        join::right_join(self.to_relation(), rhs, Some(on.into()))
    }

    fn full_join(&self, rhs: impl Into<Relation>, on: impl Into<Condition>) -> Relation
    where
        Self: Sized,
    {
        join::full_join(self.to_relation(), rhs, Some(on.into()))
    }

    fn cross_join(&self, rhs: impl Into<Relation>) -> Relation
    where
        Self: Sized,
    {
        join::cross_join(self.to_relation(), rhs)
    }
}

/// Relations that statements can write to
pub trait WritableTable: TableExpression {
    /// Start an INSERT. An empty column list targets every column.
    fn insert(&self, columns: Vec<Column>) -> InsertStatement;

    fn update(&self) -> UpdateStatement;

    fn delete(&self) -> DeleteStatement;
}

/// A physical table or a join, shared by reference count
#[derive(Debug, Clone)]
pub enum Relation {
    Table(Arc<Table>),
    Join(Arc<JoinTable>),
}

impl Relation {
    /// The physical table, if this relation is one
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Relation::Table(table) => Some(table),
            Relation::Join(_) => None,
        }
    }

    /// The join, if this relation is one
    pub fn as_join(&self) -> Option<&JoinTable> {
        match self {
            Relation::Table(_) => None,
            Relation::Join(join) => Some(join),
        }
    }
}

impl TableExpression for Relation {
    fn schema_name(&self) -> &str {
        match self {
            Relation::Table(table) => table.schema_name(),
            Relation::Join(join) => join.schema_name(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Relation::Table(table) => table.name(),
            Relation::Join(join) => join.name(),
        }
    }

    fn columns(&self) -> Vec<Column> {
        match self {
            Relation::Table(table) => table.columns(),
            Relation::Join(join) => join.columns(),
        }
    }

    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        match self {
            Relation::Table(table) => table.serialize_sql(out),
            Relation::Join(join) => join.serialize_sql(out),
        }
    }
}

impl ReadableTable for Relation {
    fn to_relation(&self) -> Relation {
        self.clone()
    }
}

impl From<Table> for Relation {
    fn from(table: Table) -> Self {
        Relation::Table(Arc::new(table))
    }
}

impl From<&Table> for Relation {
    fn from(table: &Table) -> Self {
        Relation::Table(Arc::new(table.clone()))
    }
}

impl From<Arc<Table>> for Relation {
    fn from(table: Arc<Table>) -> Self {
        Relation::Table(table)
    }
}

impl From<JoinTable> for Relation {
    fn from(join: JoinTable) -> Self {
        Relation::Join(Arc::new(join))
    }
}

impl From<&Relation> for Relation {
    fn from(relation: &Relation) -> Self {
        relation.clone()
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
