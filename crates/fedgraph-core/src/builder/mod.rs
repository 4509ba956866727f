//! Graph construction.
//!
//! [`GraphBuilder::build`] turns a [`ConfigSnapshot`] into a
//! [`DependencyGraph`]. Every call starts from a fresh [`BuildState`]; the
//! builder itself holds only options, so one builder can serve any number of
//! snapshots, from any number of threads.
//!
//! Passes run in a fixed order, each reading what the previous ones left in
//! the state:
//!
//! 1. classify applications ([`crate::classify`])
//! 2. resolve declared remotes to local ids or external remotes
//! 3. materialize local application nodes, with roles derived from step 2
//! 4. materialize external remote nodes
//! 5. emit one `consumes` edge per unordered application pair
//! 6. expand exposed modules into child nodes
//! 7. cluster libraries shared by more than one application
//! 8. finalize metadata ([`crate::metadata`])

mod edges;
mod local;
mod modules;
mod remotes;
mod shared;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap as HashMap;
use tracing::{info, info_span};

use crate::application::{ConfigSnapshot, ConfigType};
use crate::classify::{Classification, classify};
use crate::edge::DependencyGraphEdge;
use crate::graph::DependencyGraph;
use crate::metadata::finalize;
use crate::node::DependencyGraphNode;
use crate::node_id::NodeId;
use crate::resolver::{RemoteResolver, ResolutionPolicy};

/// Shared name the extractor emits when a `shared` block is computed at
/// build time and cannot be enumerated statically.
pub const DEFAULT_DYNAMIC_SHARED_SENTINEL: &str = "<dynamic>";

/// Knobs for a graph build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub resolution: ResolutionPolicy,
    pub dynamic_shared_sentinel: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            resolution: ResolutionPolicy::default(),
            dynamic_shared_sentinel: DEFAULT_DYNAMIC_SHARED_SENTINEL.to_string(),
        }
    }
}

/// Builds federation graphs from config snapshots.
#[derive(Debug)]
pub struct GraphBuilder {
    options: BuildOptions,
    resolver: RemoteResolver,
}

impl GraphBuilder {
    pub fn new(options: BuildOptions) -> Self {
        let resolver = RemoteResolver::for_policy(options.resolution);
        Self { options, resolver }
    }

    /// Replace the resolver derived from the options with a custom chain.
    pub fn with_resolver(mut self, resolver: RemoteResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn build(&self, snapshot: &ConfigSnapshot) -> DependencyGraph {
        let span = info_span!("build_dependency_graph", roots = snapshot.len());
        let _enter = span.enter();

        let mut state = BuildState::new(classify(snapshot));
        state.resolve_remotes(&self.resolver);
        state.materialize_local_nodes();
        state.materialize_external_nodes();
        state.consolidate_consumes_edges();
        state.expand_exposed_modules();
        state.cluster_shared_dependencies(&self.options.dynamic_shared_sentinel);

        let graph = state.finish();
        info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            hosts = graph.metadata.total_hosts,
            external_remotes = graph.metadata.total_remotes,
            "dependency graph built"
        );
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

/// Build a graph with default options.
pub fn build_dependency_graph(snapshot: &ConfigSnapshot) -> DependencyGraph {
    GraphBuilder::default().build(snapshot)
}

/// A remote that matched no local application.
#[derive(Debug, Clone)]
pub(super) struct ExternalRemote {
    pub name: String,
    pub url: Option<String>,
    pub config_type: ConfigType,
    /// Whether `config_type` was declared on a remote ref rather than
    /// inherited from the first consumer.
    pub config_type_declared: bool,
    pub consumer_count: usize,
}

/// Accumulators for one build. Dropped once the graph is handed out.
#[derive(Debug)]
pub(super) struct BuildState {
    pub classified: Classification,
    /// Provider id -> ids of the applications that consume it.
    pub consumers: IndexMap<NodeId, IndexSet<NodeId>>,
    /// URL a consumer declared for a provider, keyed by (provider, consumer).
    pub declared_urls: HashMap<(NodeId, NodeId), String>,
    pub externals: IndexMap<NodeId, ExternalRemote>,
    pub nodes: IndexMap<NodeId, DependencyGraphNode>,
    pub edges: Vec<DependencyGraphEdge>,
    pub exposed_module_count: usize,
    pub shared_dependency_count: usize,
}

impl BuildState {
    fn new(classified: Classification) -> Self {
        Self {
            classified,
            consumers: IndexMap::new(),
            declared_urls: HashMap::default(),
            externals: IndexMap::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            exposed_module_count: 0,
            shared_dependency_count: 0,
        }
    }

    fn finish(self) -> DependencyGraph {
        let nodes: Vec<DependencyGraphNode> = self.nodes.into_values().collect();
        let metadata = finalize(
            &self.classified,
            &nodes,
            self.shared_dependency_count,
            self.exposed_module_count,
        );

        DependencyGraph {
            nodes,
            edges: self.edges,
            metadata,
        }
    }
}
