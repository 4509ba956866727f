//! Remote resolution and external remote nodes.

use tracing::debug;

use super::{BuildState, ExternalRemote};
use crate::node::{DependencyGraphNode, NodeGroup, NodeType};
use crate::node_id::NodeId;
use crate::resolver::RemoteResolver;

impl BuildState {
    /// Record who consumes whom. Creates no nodes or edges.
    pub(super) fn resolve_remotes(&mut self, resolver: &RemoteResolver) {
        for (consumer_id, capability) in &self.classified {
            for remote in &capability.config.remotes {
                let wanted = remote.name.trim();
                if wanted.is_empty() {
                    debug!(consumer = %consumer_id, "ignoring remote without a name");
                    continue;
                }

                let provider_id = match resolver.resolve(wanted, consumer_id, &self.classified) {
                    Some((local_id, matcher)) => {
                        debug!(
                            consumer = %consumer_id,
                            remote = wanted,
                            resolved = %local_id,
                            matcher,
                            "remote resolved to local application"
                        );
                        local_id.clone()
                    }
                    None if resolver.names_consumer(wanted, consumer_id, &self.classified) => {
                        debug!(
                            consumer = %consumer_id,
                            remote = wanted,
                            "remote names its own application, skipped"
                        );
                        continue;
                    }
                    None => {
                        let external_id = NodeId::external(wanted);
                        debug!(
                            consumer = %consumer_id,
                            remote = wanted,
                            "remote is external"
                        );
                        let entry = self.externals.entry(external_id.clone()).or_insert_with(|| {
                            ExternalRemote {
                                name: wanted.to_string(),
                                url: None,
                                config_type: remote
                                    .config_type
                                    .unwrap_or(capability.config.config_type),
                                config_type_declared: remote.config_type.is_some(),
                                consumer_count: 0,
                            }
                        });
                        if entry.url.is_none() {
                            entry.url = remote.url.clone();
                        }
                        if let (false, Some(declared)) = (entry.config_type_declared, remote.config_type) {
                            entry.config_type = declared;
                            entry.config_type_declared = true;
                        }
                        external_id
                    }
                };

                if let Some(url) = &remote.url {
                    self.declared_urls
                        .entry((provider_id.clone(), consumer_id.clone()))
                        .or_insert_with(|| url.clone());
                }

                let is_new_consumer = self
                    .consumers
                    .entry(provider_id.clone())
                    .or_default()
                    .insert(consumer_id.clone());

                if is_new_consumer {
                    if let Some(external) = self.externals.get_mut(&provider_id) {
                        external.consumer_count += 1;
                    }
                }
            }
        }
    }

    /// One `remote` node per unresolved remote name, sized by consumer count.
    pub(super) fn materialize_external_nodes(&mut self) {
        for (id, external) in &self.externals {
            if self.nodes.contains_key(id) {
                continue;
            }

            let mut node = DependencyGraphNode::new(
                id.clone(),
                external.name.clone(),
                NodeType::Remote,
                external.config_type,
                NodeGroup::Remotes,
            )
            .with_size(external.consumer_count);
            node.url = external.url.clone();

            self.nodes.insert(id.clone(), node);
        }
    }
}
