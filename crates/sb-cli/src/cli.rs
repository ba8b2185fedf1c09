//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sqlbuild - compose tables and joins into SQL
#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a query definition to SQL
    Render(RenderArgs),

    /// List the columns exposed by a query definition's relation
    Columns(ColumnsArgs),
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the query definition YAML
    pub file: PathBuf,

    /// Override keyword casing from the definition
    #[arg(short, long, value_enum)]
    pub keyword_case: Option<CaseArg>,

    /// Print only the relation (FROM clause body), not a SELECT
    #[arg(long)]
    pub relation_only: bool,
}

/// Keyword casing choices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseArg {
    Upper,
    Lower,
}

/// Arguments for the columns command
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Path to the query definition YAML
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ColumnsOutput,
}

/// Columns output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnsOutput {
    /// One `table.column` per line
    Text,
    /// JSON array
    Json,
}
