//! Graph command implementation.

use fedgraph_config::Settings;
use fedgraph_core::DependencyGraph;
use tracing::info;

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Build the graph of a snapshot and print or write it.
pub async fn execute(args: GraphArgs, settings: &Settings) -> Result<()> {
    let snapshot = fedgraph_config::load_snapshot(&args.snapshot).await?;
    let graph = utils::build_graph(&snapshot, settings);

    if graph.is_empty() {
        ui::warning("No named applications in the snapshot; the graph is empty");
    }

    let rendered = render(&graph, args.format)?;

    match &args.output {
        Some(path) => {
            utils::write_output(path, &rendered).await?;
            info!(path = %path.display(), format = ?args.format, "graph written");
            ui::success(&format!(
                "Graph written to {} ({}, {})",
                path.display(),
                ui::pluralize(graph.nodes.len(), "node", "nodes"),
                ui::pluralize(graph.edges.len(), "edge", "edges")
            ));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Render the graph in the requested format, always newline-terminated.
pub fn render(graph: &DependencyGraph, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => graph.to_json()?,
        OutputFormat::Dot => graph.to_dot_format(),
        OutputFormat::Summary => ui::format_summary(graph),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
