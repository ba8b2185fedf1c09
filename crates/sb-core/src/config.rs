//! YAML query definitions
//!
//! A query definition describes tables, a starting table, a chain of joins,
//! and an optional projection list:
//!
//! ```yaml
//! options:
//!   keyword_case: upper
//! tables:
//!   - schema: shop
//!     name: orders
//!     alias: o
//!     columns: [id, customer_id]
//!   - schema: shop
//!     name: customers
//!     alias: c
//!     columns: [id, name]
//! from: o
//! joins:
//!   - kind: left
//!     table: c
//!     on:
//!       - [o.customer_id, c.id]
//! select: [o.id, c.name]
//! ```
//!
//! Tables are referenced by alias when one is set, else by name. Column
//! references are `table.column` using the same key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::buffer::RenderOptions;
use crate::column::Column;
use crate::error::{BuildError, BuildResult};
use crate::expression::{Condition, Logical, LogicalOp};
use crate::identifier::is_valid_identifier;
use crate::join::{JoinKind, JoinTable};
use crate::relation::{ReadableTable, Relation};
use crate::statement::SelectStatement;
use crate::table::Table;

/// Top-level query definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryDefinition {
    /// Rendering options
    #[serde(default)]
    pub options: RenderOptions,

    /// Tables available to the query
    pub tables: Vec<TableDefinition>,

    /// Key of the leftmost table
    pub from: String,

    /// Joins applied left to right
    #[serde(default)]
    pub joins: Vec<JoinDefinition>,

    /// `table.column` references to project; empty selects every column
    #[serde(default)]
    pub select: Vec<String>,
}

/// A table entry in a query definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDefinition {
    pub schema: String,
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub force_index: Option<String>,
}

impl TableDefinition {
    /// Key used to reference this table elsewhere in the definition
    pub fn key(&self) -> &str {
        self.alias
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .unwrap_or(&self.name)
    }

    /// Build the physical table described by this entry.
    ///
    /// `alias` and `force_index` come from the file verbatim, so both must
    /// pass the identifier grammar.
    pub fn build(&self) -> BuildResult<Table> {
        let columns = self.columns.iter().map(Column::new).collect();
        let mut table = Table::new(&self.schema, &self.name, columns)?;
        if let Some(alias) = &self.alias {
            self.check_identifier("alias", alias)?;
            table = table.with_alias(alias);
        }
        if let Some(index) = &self.force_index {
            self.check_identifier("force_index", index)?;
            table = table.with_forced_index(index);
        }
        Ok(table)
    }

    fn check_identifier(&self, field: &str, value: &str) -> BuildResult<()> {
        if is_valid_identifier(value) {
            return Ok(());
        }
        Err(BuildError::ConfigInvalid {
            message: format!(
                "invalid {} '{}' for table '{}'",
                field, value, self.name
            ),
        })
    }
}

/// One join step in a query definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinDefinition {
    pub kind: JoinKind,

    /// Key of the table joined on the right
    pub table: String,

    /// Column pairs compared for equality and combined with AND
    #[serde(default)]
    pub on: Vec<[String; 2]>,
}

impl QueryDefinition {
    /// Load a query definition from a YAML file
    pub fn load(path: &Path) -> BuildResult<Self> {
        if !path.exists() {
            return Err(BuildError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BuildError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse a query definition from YAML text
    pub fn from_yaml(content: &str) -> BuildResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> BuildResult<Self> {
        serde_yaml::from_str(content).map_err(|e| BuildError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Build the root relation: `from` joined with every join step in order
    pub fn build_relation(&self) -> BuildResult<Relation> {
        let tables = self.build_tables()?;
        self.compose(&tables)
    }

    /// Build the SELECT statement over the root relation
    pub fn build_select(&self) -> BuildResult<SelectStatement> {
        let tables = self.build_tables()?;
        let projections = self
            .select
            .iter()
            .map(|reference| resolve_column(&tables, reference))
            .collect::<BuildResult<Vec<_>>>()?;
        Ok(self.compose(&tables)?.select(projections))
    }

    fn compose(&self, tables: &HashMap<String, Table>) -> BuildResult<Relation> {
        let mut relation = Relation::from(lookup_table(tables, &self.from)?);
        for (idx, join) in self.joins.iter().enumerate() {
            let rhs = lookup_table(tables, &join.table)?;
            let condition = self.build_condition(tables, idx, join)?;
            relation = Relation::from(JoinTable::new(
                Some(relation),
                Some(Relation::from(rhs)),
                join.kind,
                condition,
            ));
        }

        log::debug!(
            "Built relation from '{}' with {} join(s)",
            self.from,
            self.joins.len()
        );
        Ok(relation)
    }

    fn build_tables(&self) -> BuildResult<HashMap<String, Table>> {
        let mut tables = HashMap::new();
        for def in &self.tables {
            let key = def.key().to_string();
            if tables.contains_key(&key) {
                return Err(BuildError::ConfigInvalid {
                    message: format!("duplicate table reference '{}'", key),
                });
            }
            tables.insert(key, def.build()?);
        }
        Ok(tables)
    }

    fn build_condition(
        &self,
        tables: &HashMap<String, Table>,
        idx: usize,
        join: &JoinDefinition,
    ) -> BuildResult<Option<Condition>> {
        if !join.kind.requires_condition() {
            if !join.on.is_empty() {
                return Err(BuildError::ConfigInvalid {
                    message: format!("join #{} ({}) must not have 'on'", idx + 1, join.kind),
                });
            }
            return Ok(None);
        }

        let mut condition: Option<Condition> = None;
        for [left, right] in &join.on {
            let left = resolve_column(tables, left)?;
            let right = resolve_column(tables, right)?;
            let cmp = left.equals(&right);
            condition = Some(match condition {
                None => cmp.into(),
                Some(prev) => Logical::new(LogicalOp::And, prev, cmp).into(),
            });
        }

        if condition.is_none() {
            return Err(BuildError::ConfigInvalid {
                message: format!("join #{} ({}) requires 'on'", idx + 1, join.kind),
            });
        }
        Ok(condition)
    }
}

fn lookup_table(tables: &HashMap<String, Table>, key: &str) -> BuildResult<Table> {
    tables
        .get(key)
        .cloned()
        .ok_or_else(|| BuildError::ConfigInvalid {
            message: format!("unknown table reference '{}'", key),
        })
}

fn resolve_column(tables: &HashMap<String, Table>, reference: &str) -> BuildResult<Column> {
    let Some((table_key, column)) = reference.split_once('.') else {
        return Err(BuildError::ConfigInvalid {
            message: format!("column reference '{}' must be 'table.column'", reference),
        });
    };
    let table = tables
        .get(table_key)
        .ok_or_else(|| BuildError::ConfigInvalid {
            message: format!("unknown table reference '{}' in '{}'", table_key, reference),
        })?;
    table.lookup_column(column).cloned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
