//! Column handles
//!
//! A column knows its own name and, once attached to a table, the name it is
//! qualified with in SQL (the table name, or the alias when one is set).

use crate::buffer::SqlBuffer;
use crate::expression::{CompareOp, Comparison};

/// A table column, optionally bound to a qualifying table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
    nullable: bool,
    table_name: Option<String>,
}

impl Column {
    /// Create an unbound, non-nullable column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            table_name: None,
        }
    }

    /// Create an unbound, nullable column
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            nullable: true,
            ..Self::new(name)
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the column accepts NULL
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Name of the table (or alias) this column is qualified with, if bound
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Return a copy of this column bound to `table_name`
    pub fn bound_to(&self, table_name: impl Into<String>) -> Self {
        let mut column = self.clone();
        column.bind(table_name);
        column
    }

    pub(crate) fn bind(&mut self, table_name: impl Into<String>) {
        self.table_name = Some(table_name.into());
    }

    /// Write the column reference: `table.name` when bound, else `name`
    pub fn serialize_sql(&self, out: &mut SqlBuffer) {
        if let Some(table) = &self.table_name {
            out.push_str(table);
            out.push_str(".");
        }
        out.push_str(&self.name);
    }

    /// `self = other`
    pub fn equals(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::Eq, other.clone())
    }

    /// `self <> other`
    pub fn not_equals(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::NotEq, other.clone())
    }

    /// `self < other`
    pub fn less_than(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::Lt, other.clone())
    }

    /// `self <= other`
    pub fn less_or_equal(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::LtEq, other.clone())
    }

    /// `self > other`
    pub fn greater_than(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::Gt, other.clone())
    }

    /// `self >= other`
    pub fn greater_or_equal(&self, other: &Column) -> Comparison {
        Comparison::new(self.clone(), CompareOp::GtEq, other.clone())
    }
}

#[cfg(test)]
#[path = "column_test.rs"]
mod tests;
