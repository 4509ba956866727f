//! The consolidated federation graph and read-only queries over it.

use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};

use crate::edge::{DependencyGraphEdge, EdgeType, unordered_pair};
use crate::metadata::GraphMetadata;
use crate::node::DependencyGraphNode;
use crate::node_id::NodeId;
use crate::{Error, Result};

/// Nodes, edges and report counts produced by one build.
///
/// Node ids are unique and every edge endpoint is a node of the graph.
/// The value is rebuilt from scratch for every snapshot; nothing links two
/// builds besides the deterministic id scheme.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: Vec<DependencyGraphNode>,
    pub edges: Vec<DependencyGraphEdge>,
    pub metadata: GraphMetadata,
}

impl DependencyGraph {
    /// An empty graph means "nothing to display", not a failure.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&DependencyGraphNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn edges_from<'a>(
        &'a self,
        id: &'a NodeId,
    ) -> impl Iterator<Item = &'a DependencyGraphEdge> + 'a {
        self.edges.iter().filter(move |edge| &edge.from == id)
    }

    pub fn edges_to<'a>(
        &'a self,
        id: &'a NodeId,
    ) -> impl Iterator<Item = &'a DependencyGraphEdge> + 'a {
        self.edges.iter().filter(move |edge| &edge.to == id)
    }

    pub fn edges_of_type(&self, edge_type: EdgeType) -> impl Iterator<Item = &DependencyGraphEdge> {
        self.edges.iter().filter(move |edge| edge.edge_type == edge_type)
    }

    /// Check the structural guarantees the renderer relies on.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateNode`] if two nodes share an id
    /// - [`Error::DanglingEdge`] if an edge endpoint is not a node
    /// - [`Error::DuplicateConsumesPair`] if two `consumes` edges join the same pair
    pub fn verify(&self) -> Result<()> {
        let mut ids: HashSet<&NodeId> = HashSet::default();
        for node in &self.nodes {
            if !ids.insert(&node.id) {
                return Err(Error::DuplicateNode(node.id.to_string()));
            }
        }

        let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::default();
        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !ids.contains(endpoint) {
                    return Err(Error::DanglingEdge {
                        from: edge.from.to_string(),
                        to: edge.to.to_string(),
                        missing: endpoint.to_string(),
                    });
                }
            }

            if edge.edge_type == EdgeType::Consumes
                && !pairs.insert(unordered_pair(&edge.from, &edge.to))
            {
                return Err(Error::DuplicateConsumesPair {
                    a: edge.from.to_string(),
                    b: edge.to.to_string(),
                });
            }
        }

        Ok(())
    }

    /// A copy with nodes sorted by id and edges by `(from, to, type)`, for
    /// comparing graphs without depending on emission order.
    pub fn normalized(&self) -> Self {
        let mut graph = self.clone();
        graph.nodes.sort_by(|a, b| a.id.cmp(&b.id));
        graph.edges.sort_by(|a, b| {
            (&a.from, &a.to, a.edge_type).cmp(&(&b.from, &b.to, b.edge_type))
        });
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ConfigType;
    use crate::node::{NodeGroup, NodeType};

    fn host(id: &str) -> DependencyGraphNode {
        DependencyGraphNode::new(
            NodeId::from_raw(id),
            id,
            NodeType::Host,
            ConfigType::Webpack,
            NodeGroup::Hosts,
        )
    }

    fn consumes(from: &str, to: &str) -> DependencyGraphEdge {
        DependencyGraphEdge::new(
            NodeId::from_raw(from),
            NodeId::from_raw(to),
            EdgeType::Consumes,
            1.0,
        )
    }

    #[test]
    fn verify_accepts_consistent_graph() {
        let graph = DependencyGraph {
            nodes: vec![host("a"), host("b")],
            edges: vec![consumes("a", "b")],
            metadata: GraphMetadata::default(),
        };
        assert!(graph.verify().is_ok());
    }

    #[test]
    fn verify_rejects_dangling_edge() {
        let graph = DependencyGraph {
            nodes: vec![host("a")],
            edges: vec![consumes("a", "ghost")],
            metadata: GraphMetadata::default(),
        };
        match graph.verify() {
            Err(Error::DanglingEdge { missing, .. }) => assert_eq!(missing, "ghost"),
            other => panic!("expected dangling edge, got {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_reverse_duplicate_pair() {
        let graph = DependencyGraph {
            nodes: vec![host("a"), host("b")],
            edges: vec![consumes("a", "b"), consumes("b", "a")],
            metadata: GraphMetadata::default(),
        };
        assert!(matches!(
            graph.verify(),
            Err(Error::DuplicateConsumesPair { .. })
        ));
    }

    #[test]
    fn verify_rejects_duplicate_node() {
        let graph = DependencyGraph {
            nodes: vec![host("a"), host("a")],
            edges: vec![],
            metadata: GraphMetadata::default(),
        };
        assert!(matches!(graph.verify(), Err(Error::DuplicateNode(_))));
    }

    #[test]
    fn normalized_sorts_nodes_and_edges() {
        let graph = DependencyGraph {
            nodes: vec![host("b"), host("a")],
            edges: vec![consumes("b", "a"), consumes("a", "b")],
            metadata: GraphMetadata::default(),
        };
        let normalized = graph.normalized();
        assert_eq!(normalized.nodes[0].id.as_str(), "a");
        assert_eq!(normalized.edges[0].from.as_str(), "a");
    }

    #[test]
    fn edge_queries_filter_by_endpoint() {
        let graph = DependencyGraph {
            nodes: vec![host("a"), host("b"), host("c")],
            edges: vec![consumes("a", "b"), consumes("a", "c")],
            metadata: GraphMetadata::default(),
        };
        let a = NodeId::from_raw("a");
        let c = NodeId::from_raw("c");
        assert_eq!(graph.edges_from(&a).count(), 2);
        assert_eq!(graph.edges_to(&c).count(), 1);
        assert_eq!(graph.edges_of_type(EdgeType::Shares).count(), 0);
        assert!(graph.node(&c).is_some());
    }
}
