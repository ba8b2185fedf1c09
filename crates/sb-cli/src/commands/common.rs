//! Helpers shared by commands

use anyhow::{Context, Result};
use sb_core::QueryDefinition;
use std::path::Path;

/// Load a query definition, attaching the path to any error
pub(crate) fn load_definition(path: &Path, verbose: bool) -> Result<QueryDefinition> {
    let def = QueryDefinition::load(path)
        .with_context(|| format!("Failed to load query definition {}", path.display()))?;
    if verbose {
        eprintln!(
            "[verbose] Loaded {} table(s), {} join(s) from {}",
            def.tables.len(),
            def.joins.len(),
            path.display()
        );
    }
    Ok(def)
}
