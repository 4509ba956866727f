use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_snapshot_path;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the dependency graph of a snapshot
    ///
    /// Prints the graph as JSON (the shape graph renderers consume), as DOT
    /// for Graphviz, or as a short summary table.
    Graph(GraphArgs),

    /// Show the details of one node
    ///
    /// Prints the same fields a graph view shows when the node is clicked.
    Inspect(InspectArgs),

    /// Lint a snapshot and verify the graph built from it
    ///
    /// Reports applications that are skipped or merged, then checks that
    /// every edge points at an existing node.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Config snapshot (.json or .toml)
    #[arg(value_name = "SNAPSHOT", value_parser = parse_snapshot_path)]
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Config snapshot (.json or .toml)
    #[arg(value_name = "SNAPSHOT", value_parser = parse_snapshot_path)]
    pub snapshot: PathBuf,

    /// Id of the node to show, e.g. `external-cart` or `shared-react`
    #[arg(value_name = "NODE_ID")]
    pub node_id: String,

    /// Print the details as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Config snapshot (.json or .toml)
    #[arg(value_name = "SNAPSHOT", value_parser = parse_snapshot_path)]
    pub snapshot: PathBuf,

    /// Fail when the snapshot has warnings
    #[arg(long)]
    pub strict: bool,
}
