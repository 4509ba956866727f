//! JSON and DOT export.

use crate::edge::EdgeType;
use crate::graph::DependencyGraph;
use crate::node::NodeType;
use crate::{Error, Result};

/// Helper to escape labels for DOT format.
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn node_shape(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Host => "box",
        NodeType::Remote => "box, style=dashed",
        NodeType::SharedDependency => "ellipse",
        NodeType::ExposedModule => "note",
    }
}

fn edge_style(edge_type: EdgeType) -> &'static str {
    match edge_type {
        EdgeType::Consumes => "solid",
        EdgeType::Exposes => "dotted",
        EdgeType::Shares => "dashed",
    }
}

impl DependencyGraph {
    /// Export the graph as pretty-printed JSON, in the shape renderers consume.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("failed to serialize graph: {e}")))
    }

    /// Read a graph previously written by [`DependencyGraph::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Serialization(format!("failed to deserialize graph: {e}")))
    }

    /// Export the graph as DOT format for visualization.
    pub fn to_dot_format(&self) -> String {
        let mut output = String::from("digraph FederationGraph {\n    rankdir=LR;\n");

        for node in &self.nodes {
            output.push_str(&format!(
                "    \"{}\" [label=\"{}\", shape={}];\n",
                escape_label(node.id.as_str()),
                escape_label(&node.label),
                node_shape(node.node_type)
            ));
        }

        for edge in &self.edges {
            let mut attrs = format!("style={}", edge_style(edge.edge_type));
            if let Some(label) = &edge.label {
                attrs.push_str(&format!(", label=\"{}\"", escape_label(label)));
            }
            if edge.bidirectional {
                attrs.push_str(", dir=both");
            }
            output.push_str(&format!(
                "    \"{}\" -> \"{}\" [{}];\n",
                escape_label(edge.from.as_str()),
                escape_label(edge.to.as_str()),
                attrs
            ));
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ConfigType;
    use crate::edge::DependencyGraphEdge;
    use crate::node::{DependencyGraphNode, NodeGroup};
    use crate::node_id::NodeId;

    fn sample() -> DependencyGraph {
        let a = NodeId::from_raw("a");
        let b = NodeId::external("say \"hi\"");
        DependencyGraph {
            nodes: vec![
                DependencyGraphNode::new(a.clone(), "a", NodeType::Host, ConfigType::Vite, NodeGroup::Hosts),
                DependencyGraphNode::new(
                    b.clone(),
                    "say \"hi\"",
                    NodeType::Remote,
                    ConfigType::Vite,
                    NodeGroup::Remotes,
                ),
            ],
            edges: vec![
                DependencyGraphEdge::new(a, b, EdgeType::Consumes, 1.5)
                    .with_label(Some("↔ b".into()))
                    .bidirectional(true),
            ],
            metadata: Default::default(),
        }
    }

    #[test]
    fn json_uses_wire_field_names() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"totalHosts\""));
        assert!(json.contains("\"configType\": \"vite\""));
        assert!(json.contains("\"type\": \"consumes\""));
        assert!(json.contains("\"group\": \"remotes\""));
        assert!(!json.contains("\"status\""));

        let parsed = DependencyGraph::from_json(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn dot_escapes_quotes_and_marks_bidirectional_edges() {
        let dot = sample().to_dot_format();
        assert!(dot.starts_with("digraph FederationGraph {"));
        assert!(dot.contains("\"external-say \\\"hi\\\"\""));
        assert!(dot.contains("dir=both"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
