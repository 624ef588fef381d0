use crate::args::{Cli, Commands};
use crate::config;
use crate::handlers;
use anyhow::Result;
use clap::CommandFactory;
use mhist_store::LogLayout;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        // A bare invocation is a usage error, not a default action.
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    match command {
        Commands::Record { source } => {
            let layout = LogLayout::new(config::resolve_root(cli.root.as_deref())?);
            handlers::record::handle(&layout, source)
        }

        Commands::Query {
            selector,
            limit,
            fuzzy_ratio,
        } => {
            let layout = LogLayout::new(config::resolve_root(cli.root.as_deref())?);
            handlers::query::handle(&layout, selector, limit, fuzzy_ratio)
        }

        Commands::Deploy { action } => handlers::deploy::handle(action),
    }
}
