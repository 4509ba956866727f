//! Command-line interface definition.
//!
//! - `fedgraph graph` - build the graph and print it as JSON, DOT or a summary
//! - `fedgraph inspect` - show the details of one node
//! - `fedgraph check` - lint a snapshot and verify the graph built from it

mod commands;
pub mod enums;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, GraphArgs, InspectArgs};
pub use enums::*;
pub use validation::parse_snapshot_path;

/// fedgraph - dependency graphs for module federation workspaces
#[derive(Parser, Debug)]
#[command(
    name = "fedgraph",
    version,
    about = "Build dependency graphs for module federation workspaces",
    long_about = "fedgraph reads the federation settings of every webpack and vite application\n\
                  in a workspace snapshot and builds one graph of hosts, remotes, exposed\n\
                  modules and shared libraries."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file (defaults to ./fedgraph.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How remote names are matched to applications in the snapshot
    ///
    /// Overrides `graph.resolution` from the settings file.
    #[arg(short, long, global = true, value_enum)]
    pub resolution: Option<Resolution>,

    /// Shared entry name that stands for a dynamically computed shared set
    ///
    /// Overrides `graph.dynamic_shared_sentinel` from the settings file.
    #[arg(long, global = true, value_name = "NAME")]
    pub dynamic_shared_sentinel: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
