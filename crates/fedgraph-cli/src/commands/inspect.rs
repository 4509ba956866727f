//! Inspect command implementation.

use fedgraph_config::Settings;
use fedgraph_core::{DependencyGraph, NodeId, node_details};

use crate::cli::InspectArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};

const MAX_SUGGESTIONS: usize = 5;

/// Print the details of one node, followed by its connections.
pub async fn execute(args: InspectArgs, settings: &Settings) -> Result<()> {
    let snapshot = fedgraph_config::load_snapshot(&args.snapshot).await?;
    let graph = utils::build_graph(&snapshot, settings);

    let id = NodeId::from_raw(args.node_id.as_str());
    let Some(node) = graph.node(&id) else {
        return Err(CliError::NodeNotFound {
            hint: suggest(&graph, &args.node_id),
            id: args.node_id,
        });
    };

    let details = node_details(node);
    if args.json {
        let json = serde_json::to_string_pretty(&details).context("serializing node details")?;
        println!("{json}");
        return Ok(());
    }

    print!("{details}");
    let connections = describe_connections(&graph, &id);
    if !connections.is_empty() {
        println!();
        println!("Connections:");
        for line in connections {
            println!("  {line}");
        }
    }

    Ok(())
}

/// One line per edge touching `id`: `-> target (type)` or `<- source (type)`.
pub fn describe_connections(graph: &DependencyGraph, id: &NodeId) -> Vec<String> {
    let outgoing = graph
        .edges_from(id)
        .map(|edge| format!("-> {} ({})", edge.to, edge.edge_type));
    let incoming = graph
        .edges_to(id)
        .map(|edge| format!("<- {} ({})", edge.from, edge.edge_type));
    outgoing.chain(incoming).collect()
}

/// Hint listing node ids that contain the query, ignoring case.
fn suggest(graph: &DependencyGraph, query: &str) -> String {
    let query = query.to_lowercase();
    let close: Vec<&str> = graph
        .nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| id.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .collect();

    if close.is_empty() {
        "Run `fedgraph graph <SNAPSHOT>` to list node ids".to_string()
    } else {
        format!("Did you mean: {}", close.join(", "))
    }
}
