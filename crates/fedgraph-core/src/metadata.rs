//! Aggregate counts reported alongside the graph.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::node::{DependencyGraphNode, NodeGroup};

/// Applications bucketed by what their own config declares.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBreakdown {
    /// Declares remotes, exposes nothing.
    pub consumer_only: usize,
    /// Exposes modules, declares no remotes.
    pub provider_only: usize,
    /// Declares remotes and exposes modules.
    pub bidirectional: usize,
    /// Neither.
    pub standalone: usize,
}

impl RoleBreakdown {
    pub fn total(&self) -> usize {
        self.consumer_only + self.provider_only + self.bidirectional + self.standalone
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    /// Every local application, whatever its role.
    pub total_hosts: usize,
    /// External (unresolved) remotes only.
    pub total_remotes: usize,
    pub total_shared_deps: usize,
    pub total_exposed_modules: usize,
    #[serde(default)]
    pub roles: RoleBreakdown,
}

/// Recompute report counts from the classified applications and final nodes.
///
/// Shared-dependency and exposed-module totals are counted while their
/// nodes are created and passed in as is.
pub fn finalize(
    classified: &Classification,
    nodes: &[DependencyGraphNode],
    shared_dependency_count: usize,
    exposed_module_count: usize,
) -> GraphMetadata {
    let mut roles = RoleBreakdown::default();
    for capability in classified.values() {
        match (capability.has_remotes, capability.has_exposes) {
            (true, false) => roles.consumer_only += 1,
            (false, true) => roles.provider_only += 1,
            (true, true) => roles.bidirectional += 1,
            (false, false) => roles.standalone += 1,
        }
    }

    let total_remotes = nodes
        .iter()
        .filter(|node| node.group == NodeGroup::Remotes && node.id.is_external())
        .count();

    GraphMetadata {
        total_hosts: roles.total(),
        total_remotes,
        total_shared_deps: shared_dependency_count,
        total_exposed_modules: exposed_module_count,
        roles,
    }
}
