//! Plain-text rendering of graph summaries.

use fedgraph_core::DependencyGraph;

const RULE_WIDTH: usize = 40;

/// `1 remote`, `2 remotes`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Render the `summary` output format.
///
/// # Examples
///
/// ```
/// use fedgraph_cli::ui::format_summary;
/// use fedgraph_core::DependencyGraph;
///
/// let summary = format_summary(&DependencyGraph::default());
/// assert!(summary.starts_with("Federation Graph\n"));
/// assert!(summary.contains("Applications"));
/// ```
pub fn format_summary(graph: &DependencyGraph) -> String {
    let stats = graph.statistics();
    let rule = "─".repeat(RULE_WIDTH);

    let rows: [(&str, usize); 12] = [
        ("Applications", stats.application_count),
        ("  consumers only", stats.roles.consumer_only),
        ("  providers only", stats.roles.provider_only),
        ("  bidirectional", stats.roles.bidirectional),
        ("  standalone", stats.roles.standalone),
        ("External remotes", stats.external_remote_count),
        ("Exposed modules", stats.exposed_module_count),
        ("Shared libraries", stats.shared_dependency_count),
        ("Consumes edges", stats.consumes_edge_count),
        ("  bidirectional", stats.bidirectional_edge_count),
        ("Exposes edges", stats.exposes_edge_count),
        ("Shares edges", stats.shares_edge_count),
    ];

    let mut out = String::from("Federation Graph\n");
    out.push_str(&rule);
    out.push('\n');
    for (label, count) in rows {
        out.push_str(&format!("{label:<24}{count:>8}\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{}, {}\n",
        pluralize(stats.node_count, "node", "nodes"),
        pluralize(stats.edge_count, "edge", "edges")
    ));
    out
}
