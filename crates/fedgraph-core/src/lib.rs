//! # fedgraph-core
//!
//! Dependency graphs for module-federation workspaces.
//!
//! Feed it the federation settings of every application found across one or
//! more project roots (as extracted from `webpack.config.js` /
//! `vite.config.ts`) and it returns one consolidated graph: applications,
//! external remotes, exposed modules and shared libraries as nodes;
//! `consumes`, `exposes` and `shares` relationships as edges.
//!
//! The crate does no I/O. Building is a pure, synchronous transform of its
//! input; two builds over the same snapshot produce the same graph.
//!
//! ## Architecture
//!
//! ```text
//!  ConfigSnapshot (rootPath -> [ApplicationConfig])
//!         │
//!         ▼
//!  ┌──────────────┐   ┌──────────────────┐   ┌──────────────────┐
//!  │  classify    │──▶│  GraphBuilder    │──▶│ metadata::       │
//!  │  (per app)   │   │  resolve, nodes, │   │ finalize         │
//!  └──────────────┘   │  edges, modules, │   └────────┬─────────┘
//!                     │  shared          │            │
//!                     └──────────────────┘            ▼
//!                                              DependencyGraph
//!                                                     │
//!                                                     ▼
//!                                          details::node_details
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fedgraph_core::{
//!     ApplicationConfig, ConfigSnapshot, ConfigType, ExposeRef, RemoteRef,
//!     build_dependency_graph,
//! };
//!
//! let mut snapshot = ConfigSnapshot::new();
//! snapshot.insert(
//!     "/workspace/shop".to_string(),
//!     vec![
//!         ApplicationConfig::new("shell", ConfigType::Webpack).remote(RemoteRef::new("cart")),
//!         ApplicationConfig::new("cart", ConfigType::Webpack)
//!             .expose(ExposeRef::new("./Cart", "./src/Cart.tsx")),
//!     ],
//! );
//!
//! let graph = build_dependency_graph(&snapshot);
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.metadata.total_hosts, 2);
//! graph.verify().unwrap();
//! ```

pub mod application;
pub mod builder;
pub mod classify;
pub mod details;
pub mod edge;
pub mod graph;
pub mod metadata;
pub mod node;
pub mod node_id;
pub mod resolver;
mod serialization;
pub mod statistics;

pub use application::{
    ApplicationConfig, ConfigSnapshot, ConfigType, ExposeRef, RemoteRef, SharedDependencyRef,
};
pub use builder::{
    BuildOptions, DEFAULT_DYNAMIC_SHARED_SENTINEL, GraphBuilder, build_dependency_graph,
};
pub use classify::{AppRole, Capability, Classification, classify};
pub use details::{DetailLine, NodeDetails, node_details};
pub use edge::{DependencyGraphEdge, EdgeType};
pub use graph::DependencyGraph;
pub use metadata::{GraphMetadata, RoleBreakdown};
pub use node::{DependencyGraphNode, NodeGroup, NodeType};
pub use node_id::{NodeId, root_hash};
pub use resolver::{
    CaseInsensitiveMatcher, ContainsMatcher, ExactMatcher, RemoteMatcher, RemoteResolver,
    ResolutionPolicy,
};
pub use statistics::FederationStatistics;

/// Error types for graph verification and serialization.
///
/// Building a graph never fails; these only come out of the checks and
/// format conversions layered on top of a built graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("edge {from} -> {to} references missing node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("more than one consumes edge between {a} and {b}")]
    DuplicateConsumesPair { a: String, b: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fedgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
