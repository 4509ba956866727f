use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node_id::NodeId;

/// Relationship an edge encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// `from` loads code from `to` at runtime.
    Consumes,
    /// `from` owns the exposed module `to`.
    Exposes,
    /// `from` participates in sharing the library `to`.
    Shares,
}

impl EdgeType {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeType::Consumes => "consumes",
            EdgeType::Exposes => "exposes",
            EdgeType::Shares => "shares",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge of the consolidated federation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub strength: f64,
    pub bidirectional: bool,
}

impl DependencyGraphEdge {
    pub fn new(from: NodeId, to: NodeId, edge_type: EdgeType, strength: f64) -> Self {
        Self {
            from,
            to,
            edge_type,
            label: None,
            strength,
            bidirectional: false,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Whether this edge connects `a` and `b`, in either direction.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

/// Order-insensitive key for a pair of node ids.
pub(crate) fn unordered_pair(a: &NodeId, b: &NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
