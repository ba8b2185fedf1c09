//! Physical tables
//!
//! A [`Table`] is a named base relation with a fixed column list. Aliased and
//! index-forced variants are produced as new values; a table is never mutated
//! after construction, so it can be shared freely between join trees and
//! statements.

use std::collections::HashMap;
use std::sync::Arc;

use crate::buffer::SqlBuffer;
use crate::column::Column;
use crate::error::{BuildError, BuildResult};
use crate::identifier::is_valid_identifier;
use crate::relation::{ReadableTable, Relation, TableExpression, WritableTable};
use crate::statement::{DeleteStatement, InsertStatement, UpdateStatement};

/// A physical table in the database, readable and writable
#[derive(Debug, Clone)]
pub struct Table {
    schema_name: String,
    name: String,
    alias: Option<String>,
    columns: Vec<Column>,
    /// Column name -> position in `columns`; later duplicates win
    column_lookup: HashMap<String, usize>,
    forced_index: Option<String>,
}

impl Table {
    /// Define a table.
    ///
    /// Every column is bound to `name`. Fails if `name` is not a valid
    /// identifier or `columns` is empty. The schema name is only checked
    /// when the table is serialized.
    pub fn new(
        schema_name: impl Into<String>,
        name: impl Into<String>,
        columns: Vec<Column>,
    ) -> BuildResult<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(BuildError::InvalidTableName { name });
        }
        if columns.is_empty() {
            return Err(BuildError::EmptyColumns { table: name });
        }

        let mut table = Self {
            schema_name: schema_name.into(),
            name,
            alias: None,
            columns,
            column_lookup: HashMap::new(),
            forced_index: None,
        };
        table.bind_columns();

        for (idx, column) in table.columns.iter().enumerate() {
            if let Some(prev) = table.column_lookup.insert(column.name().to_string(), idx) {
                log::warn!(
                    "Duplicate column '{}' in table '{}': position {} shadows position {}",
                    column.name(),
                    table.name,
                    idx,
                    prev
                );
            }
        }

        Ok(table)
    }

    /// Alias, if one is set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Forced index, if one is set
    pub fn forced_index(&self) -> Option<&str> {
        self.forced_index.as_deref()
    }

    /// Name columns are qualified with: the alias when set, else the table name
    pub fn binding_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Build an ad hoc column reference qualified with this table.
    ///
    /// The reference is qualified with [`binding_name`](Self::binding_name),
    /// so it follows the alias when one is set. The column need not be part of the table definition; the lookup map
    /// is neither consulted nor changed.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::new(name).bound_to(self.binding_name())
    }

    /// Look up a defined column by name
    pub fn lookup_column(&self, name: &str) -> BuildResult<&Column> {
        self.column_lookup
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| BuildError::NoSuchColumn {
                column: name.to_string(),
                table: self.name.clone(),
            })
    }

    /// All defined columns in declaration order, for use as a projection list
    pub fn projections(&self) -> &[Column] {
        &self.columns
    }

    /// Return a copy of this table under `alias`, with every column rebound
    /// to it. An empty alias clears any existing alias.
    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        let mut table = self.clone();
        table.alias = if alias.is_empty() { None } else { Some(alias) };
        table.bind_columns();
        table
    }

    /// Return a copy of this table that forces `index`. An empty name clears
    /// any forced index.
    pub fn with_forced_index(&self, index: impl Into<String>) -> Self {
        let index = index.into();
        let mut table = self.clone();
        table.forced_index = if index.is_empty() { None } else { Some(index) };
        table
    }

    fn bind_columns(&mut self) {
        let binding = self.binding_name().to_string();
        for column in &mut self.columns {
            column.bind(binding.as_str());
        }
    }
}

impl TableExpression for Table {
    fn schema_name(&self) -> &str {
        &self.schema_name
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> Vec<Column> {
        self.columns.clone()
    }

    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        if !is_valid_identifier(&self.schema_name) {
            return Err(BuildError::InvalidSchemaName {
                name: self.schema_name.clone(),
                table: self.name.clone(),
            });
        }

        out.push_str(&self.schema_name);
        out.push_str(".");
        out.push_str(&self.name);

        if let Some(alias) = &self.alias {
            out.push_keyword(" AS ");
            out.push_str(alias);
        }

        if let Some(index) = &self.forced_index {
            if !is_valid_identifier(index) {
                return Err(BuildError::InvalidIndexName {
                    name: index.clone(),
                });
            }
            out.push_keyword(" FORCE INDEX (");
            out.push_str(index);
            out.push_str(")");
        }

        Ok(())
    }
}

impl ReadableTable for Table {
    fn to_relation(&self) -> Relation {
        Relation::from(self)
    }
}

impl WritableTable for Table {
    fn insert(&self, columns: Vec<Column>) -> InsertStatement {
        InsertStatement::new(Arc::new(self.clone()), columns)
    }

    fn update(&self) -> UpdateStatement {
        UpdateStatement::new(Arc::new(self.clone()))
    }

    fn delete(&self) -> DeleteStatement {
        DeleteStatement::new(Arc::new(self.clone()))
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
