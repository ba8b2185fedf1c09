//! Error types for sb-core

use thiserror::Error;

/// Errors raised while building or serializing relations
#[derive(Error, Debug)]
pub enum BuildError {
    /// B001: Table defined without columns
    #[error("[B001] Table '{table}' has no columns")]
    EmptyColumns { table: String },

    /// B002: Table name fails the identifier grammar
    #[error("[B002] Invalid table name '{name}'")]
    InvalidTableName { name: String },

    /// B003: Column lookup failed
    #[error("[B003] No such column '{column}' in table '{table}'")]
    NoSuchColumn { column: String, table: String },

    /// B004: Join has no left-hand relation
    #[error("[B004] Join is missing its left-hand relation. Generated sql: {sql}")]
    MissingLhs { sql: String },

    /// B005: Join has no right-hand relation
    #[error("[B005] Join is missing its right-hand relation. Generated sql: {sql}")]
    MissingRhs { sql: String },

    /// B006: Non-cross join has no ON condition
    #[error("[B006] {kind} is missing its ON condition. Generated sql: {sql}")]
    MissingCondition { kind: String, sql: String },

    /// B007: Schema name fails the identifier grammar
    #[error("[B007] Invalid schema name '{name}' for table '{table}'")]
    InvalidSchemaName { name: String, table: String },

    /// B008: Forced index name fails the identifier grammar
    #[error("[B008] '{name}' is not a valid identifier for an index")]
    InvalidIndexName { name: String },

    /// B009: Query definition file not found
    #[error("[B009] Query definition not found: {path}")]
    ConfigNotFound { path: String },

    /// B010: Query definition could not be parsed
    #[error("[B010] Failed to parse query definition {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// B011: Query definition is structurally invalid
    #[error("[B011] Invalid query definition: {message}")]
    ConfigInvalid { message: String },

    /// IO error with path context
    #[error("IO error at {path}: {source}")]
    IoWithPath {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for BuildError
pub type BuildResult<T> = Result<T, BuildError>;
