use serde::{Deserialize, Serialize};

use crate::edge::EdgeType;
use crate::graph::DependencyGraph;
use crate::metadata::RoleBreakdown;
use crate::node::NodeType;

/// Summary of a federation graph for dashboards or logging.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FederationStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub application_count: usize,
    pub external_remote_count: usize,
    pub exposed_module_count: usize,
    pub shared_dependency_count: usize,
    pub consumes_edge_count: usize,
    pub bidirectional_edge_count: usize,
    pub exposes_edge_count: usize,
    pub shares_edge_count: usize,
    pub roles: RoleBreakdown,
}

impl DependencyGraph {
    /// Compute a statistics snapshot.
    pub fn statistics(&self) -> FederationStatistics {
        let count_nodes = |kind: NodeType| self.nodes.iter().filter(|n| n.node_type == kind).count();
        let count_edges = |kind: EdgeType| self.edges_of_type(kind).count();

        FederationStatistics {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            application_count: count_nodes(NodeType::Host),
            external_remote_count: self.metadata.total_remotes,
            exposed_module_count: count_nodes(NodeType::ExposedModule),
            shared_dependency_count: count_nodes(NodeType::SharedDependency),
            consumes_edge_count: count_edges(EdgeType::Consumes),
            bidirectional_edge_count: self
                .edges_of_type(EdgeType::Consumes)
                .filter(|edge| edge.bidirectional)
                .count(),
            exposes_edge_count: count_edges(EdgeType::Exposes),
            shares_edge_count: count_edges(EdgeType::Shares),
            roles: self.metadata.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_zero_statistics() {
        assert_eq!(
            DependencyGraph::default().statistics(),
            FederationStatistics::default()
        );
    }
}
