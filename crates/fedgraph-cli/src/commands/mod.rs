//! Command implementations.
//!
//! - [`graph`] - build and print the graph
//! - [`inspect`] - details of one node
//! - [`check`] - lint the snapshot and verify the graph
//!
//! Each command exposes an `execute` function taking its parsed arguments
//! and the loaded settings.

pub mod check;
pub mod graph;
pub mod inspect;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use graph::execute as graph_execute;
pub use inspect::execute as inspect_execute;
