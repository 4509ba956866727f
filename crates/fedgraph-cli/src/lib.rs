//! fedgraph CLI - build and inspect module federation dependency graphs.
//!
//! Wraps `fedgraph-core` and `fedgraph-config` in a command-line tool:
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - `graph`, `inspect` and `check`
//! - [`config`] - settings layering for a parsed command line
//! - [`error`] - error hierarchy and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and summary formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use fedgraph_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false, None);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
