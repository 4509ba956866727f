//! Settings for a parsed command line.
//!
//! Layering lives in `fedgraph-config`; this module only decides which
//! settings file to use and turns CLI flags into overrides.

mod conversions;

use fedgraph_config::{Settings, SettingsOverrides};
use tracing::debug;

use crate::cli::Cli;
use crate::error::Result;

/// Load settings for this invocation.
///
/// Priority, highest first: CLI flags, `FEDGRAPH_*` environment variables,
/// the settings file, defaults. An explicit `--config` must exist; otherwise `fedgraph.toml`
/// in the current directory is used when present.
pub fn load_settings(args: &Cli) -> Result<Settings> {
    let overrides = SettingsOverrides {
        resolution: args.resolution.map(Into::into),
        dynamic_shared_sentinel: args.dynamic_shared_sentinel.clone(),
    };

    let settings = match &args.config {
        Some(path) => Settings::load(Some(path), &overrides)?,
        None => fedgraph_config::discover(&overrides)?,
    };

    debug!(
        resolution = %settings.graph.resolution,
        sentinel = %settings.graph.dynamic_shared_sentinel,
        "settings loaded"
    );
    Ok(settings)
}
