//! Flat, human-readable projection of a single node, shown when a node is
//! clicked in a graph view or inspected from the command line.

use std::fmt;

use serde::Serialize;

use crate::node::DependencyGraphNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

/// Ordered detail lines for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    pub title: String,
    pub lines: Vec<DetailLine>,
}

impl NodeDetails {
    /// Value of the line with the given label, if present.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for NodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// Project a node into display lines.
///
/// Always emits name, type and config type; every other field only when
/// present. Size is omitted when it is 1 because every node has at least that.
pub fn node_details(node: &DependencyGraphNode) -> NodeDetails {
    let mut lines = vec![
        DetailLine {
            label: "Name",
            value: node.label.clone(),
        },
        DetailLine {
            label: "Type",
            value: node.node_type.humanized(),
        },
        DetailLine {
            label: "Config Type",
            value: node.config_type.to_string(),
        },
    ];

    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(DetailLine { label, value });
        }
    };

    push("URL", node.url.clone());
    push("Version", node.version.clone());
    push(
        "Exposed Modules",
        node.exposed_modules
            .as_ref()
            .filter(|modules| !modules.is_empty())
            .map(|modules| modules.join(", ")),
    );
    push(
        "Shared Dependencies",
        node.shared_dependencies
            .as_ref()
            .filter(|deps| !deps.is_empty())
            .map(|deps| deps.join(", ")),
    );
    push("Size", (node.size > 1).then(|| node.size.to_string()));
    push("Status", node.status.clone());
    push("Group", Some(node.group.to_string()));

    NodeDetails {
        title: node.label.clone(),
        lines,
    }
}
