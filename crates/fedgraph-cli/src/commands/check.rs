//! Check command implementation.
//!
//! Lints the snapshot, lists remotes that point outside it, then builds the
//! graph and verifies it.

use fedgraph_config::{Settings, validate_snapshot};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Fails when the snapshot cannot be read, when the built graph does not
/// verify, or under `--strict` when the snapshot has warnings.
pub async fn execute(args: CheckArgs, settings: &Settings) -> Result<()> {
    ui::info(&format!("Checking {}...", args.snapshot.display()));

    let snapshot = fedgraph_config::load_snapshot(&args.snapshot).await?;
    let report = validate_snapshot(&snapshot);
    for warning in &report.warnings {
        ui::warning(&warning.to_string());
    }

    let graph = utils::build_graph(&snapshot, settings);
    if let Err(e) = graph.verify() {
        ui::error("Graph verification failed");
        return Err(e).with_hint("Re-run with --verbose and report the snapshot that triggers this");
    }

    for node in graph.nodes.iter().filter(|node| node.id.is_external()) {
        ui::info(&format!(
            "Unresolved remote '{}' used by {}",
            node.label,
            ui::pluralize(node.size, "application", "applications")
        ));
    }

    ui::success(&format!(
        "{} across {}: {}, {}",
        ui::pluralize(report.applications, "application", "applications"),
        ui::pluralize(report.roots, "root", "roots"),
        ui::pluralize(graph.nodes.len(), "node", "nodes"),
        ui::pluralize(graph.edges.len(), "edge", "edges"),
    ));

    if args.strict && !report.is_clean() {
        return Err(CliError::CheckFailed(format!(
            "{} in strict mode",
            ui::pluralize(report.warnings.len(), "warning", "warnings")
        )));
    }

    if report.is_clean() {
        ui::success("No warnings");
    }
    Ok(())
}
