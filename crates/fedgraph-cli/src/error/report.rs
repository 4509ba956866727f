//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert a `CliError` into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::InvalidSnapshot {
            source_name,
            message,
        }) => miette::miette!(
            help = "The top level must map each project root to a list of application configs",
            "Invalid snapshot {}: {}",
            source_name,
            message
        ),
        CliError::Config(e) => miette::miette!("{}", e),
        CliError::Graph(e) => miette::miette!(
            help = "The graph builder produced an inconsistent graph; please report this with the snapshot attached",
            "Graph error: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}
