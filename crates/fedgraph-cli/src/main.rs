//! fedgraph - dependency graphs for module federation workspaces.
//!
//! Entry point: argument parsing, settings, logging, then command dispatch.

use clap::Parser;
use fedgraph_cli::{cli, commands, config, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    ui::init_colors(args.no_color);

    // Settings come first so `log_level` can feed the logger
    let settings = config::load_settings(&args).map_err(error::cli_error_to_miette)?;
    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color,
        settings.log_level.as_deref(),
    );

    let result = match args.command {
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args, &settings).await,
        cli::Command::Inspect(inspect_args) => {
            commands::inspect_execute(inspect_args, &settings).await
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args, &settings).await,
    };

    result.map_err(error::cli_error_to_miette)
}
