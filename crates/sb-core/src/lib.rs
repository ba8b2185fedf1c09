//! sb-core - Core library for sqlbuild
//!
//! This crate composes physical tables, aliases, index hints, and n-ary joins
//! into relation values that serialize to SQL text, plus the statement
//! factories and YAML query definitions built on top of them.

pub mod buffer;
pub mod column;
pub mod config;
pub mod error;
pub mod expression;
pub mod identifier;
pub mod join;
pub mod logger;
pub mod relation;
pub mod statement;
pub mod table;

pub use buffer::{KeywordCase, RenderOptions, SqlBuffer};
pub use column::Column;
pub use config::{JoinDefinition, QueryDefinition, TableDefinition};
pub use error::{BuildError, BuildResult};
pub use expression::{BoolExpression, CompareOp, Comparison, Condition, Logical, LogicalOp};
pub use identifier::is_valid_identifier;
pub use join::{cross_join, full_join, inner_join, left_join, right_join, JoinKind, JoinTable};
pub use logger::{LogCrateLogger, NoopLogger, RecordingLogger, SqlLogger};
pub use relation::{ReadableTable, Relation, TableExpression, WritableTable};
pub use statement::{DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement};
pub use table::Table;
