//! Render command implementation

use anyhow::{Context, Result};
use sb_core::{KeywordCase, LogCrateLogger, RenderOptions, Statement, TableExpression};

use crate::cli::{CaseArg, GlobalArgs, RenderArgs};
use crate::commands::common::load_definition;

/// Execute the render command
pub(crate) fn execute(args: &RenderArgs, global: &GlobalArgs) -> Result<()> {
    let sql = render_sql(args, global)?;
    println!("{}", sql);
    Ok(())
}

/// Render the definition at `args.file` to SQL text
pub(crate) fn render_sql(args: &RenderArgs, global: &GlobalArgs) -> Result<String> {
    let def = load_definition(&args.file, global.verbose)?;

    let mut options = def.options;
    if let Some(case) = args.keyword_case {
        options = RenderOptions {
            keyword_case: match case {
                CaseArg::Upper => KeywordCase::Upper,
                CaseArg::Lower => KeywordCase::Lower,
            },
        };
    }

    log::debug!(
        "Rendering {} with keyword case {:?}",
        args.file.display(),
        options.keyword_case
    );

    if args.relation_only {
        let relation = def.build_relation()?;
        return relation
            .to_sql_with(options)
            .context("Failed to serialize relation");
    }

    let select = def.build_select()?;
    select
        .render(options, &LogCrateLogger)
        .context("Failed to render SELECT")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
