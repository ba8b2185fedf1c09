//! sqlbuild CLI - render table/join definitions to SQL

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{columns, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Render(args) => render::execute(args, &cli.global),
        cli::Commands::Columns(args) => columns::execute(args, &cli.global),
    }
}
