//! `consumes` edge consolidation.

use rustc_hash::FxHashSet as HashSet;

use super::BuildState;
use crate::edge::{DependencyGraphEdge, EdgeType, unordered_pair};
use crate::node_id::NodeId;

const CONSUMES_STRENGTH: f64 = 1.0;
const BIDIRECTIONAL_STRENGTH: f64 = 1.5;
const BIDIRECTIONAL_PREFIX: &str = "↔ ";

impl BuildState {
    /// Emit at most one `consumes` edge per unordered pair of nodes.
    ///
    /// When two applications list each other, both directions are in the
    /// consumer table; the first one visited produces a single edge marked
    /// bidirectional and the second is skipped.
    pub(super) fn consolidate_consumes_edges(&mut self) {
        let mut emitted: HashSet<(NodeId, NodeId)> = HashSet::default();
        let mut edges = Vec::new();

        for (provider_id, consumers) in &self.consumers {
            for consumer_id in consumers {
                if !emitted.insert(unordered_pair(provider_id, consumer_id)) {
                    continue;
                }

                let bidirectional = self
                    .consumers
                    .get(consumer_id)
                    .is_some_and(|back| back.contains(provider_id));
                let label = self.consumes_label(provider_id, consumer_id);

                let edge = if bidirectional {
                    DependencyGraphEdge::new(
                        consumer_id.clone(),
                        provider_id.clone(),
                        EdgeType::Consumes,
                        BIDIRECTIONAL_STRENGTH,
                    )
                    .with_label(Some(format!("{BIDIRECTIONAL_PREFIX}{label}")))
                    .bidirectional(true)
                } else {
                    DependencyGraphEdge::new(
                        consumer_id.clone(),
                        provider_id.clone(),
                        EdgeType::Consumes,
                        CONSUMES_STRENGTH,
                    )
                    .with_label(Some(label))
                };
                edges.push(edge);
            }
        }

        self.edges.extend(edges);
    }

    /// Provider URL if known, else the URL the consumer declared, else the
    /// provider's label.
    fn consumes_label(&self, provider_id: &NodeId, consumer_id: &NodeId) -> String {
        let provider = self.nodes.get(provider_id);

        provider
            .and_then(|node| node.url.clone())
            .or_else(|| {
                self.declared_urls
                    .get(&(provider_id.clone(), consumer_id.clone()))
                    .cloned()
            })
            .or_else(|| provider.map(|node| node.label.clone()))
            .unwrap_or_else(|| provider_id.to_string())
    }
}
