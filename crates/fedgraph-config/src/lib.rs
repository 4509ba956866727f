//! Settings and input loading for fedgraph.
//!
//! Two kinds of files come through here:
//!
//! - `fedgraph.toml`, the tool's own settings, layered with environment
//!   variables and command-line overrides ([`Settings`]).
//! - config snapshots, the `rootPath -> [ApplicationConfig]` documents the
//!   graph is built from ([`load_snapshot`]).

pub mod discovery;
pub mod error;
pub mod settings;
pub mod snapshot;
pub mod validation;

pub use error::*;
pub use settings::*;

pub use discovery::{SETTINGS_FILE_NAME, SettingsDiscovery, discover};
pub use snapshot::{SnapshotFormat, load_snapshot, parse_snapshot};
pub use validation::{SnapshotReport, SnapshotWarning, validate_snapshot};
