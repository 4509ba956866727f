//! Logging setup for the fedgraph CLI.
//!
//! Logs go to stderr so graph output on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use fedgraph_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false, None);
//! info!("building graph");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "fedgraph_core=debug,fedgraph_config=debug,fedgraph_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "fedgraph_core=info,fedgraph_config=info,fedgraph_cli=info";

/// Pick the filter directives.
///
/// Priority:
/// 1. `--verbose`: debug for fedgraph crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. `log_level` from settings
/// 5. info for fedgraph crates
pub fn filter_directives(verbose: bool, quiet: bool, settings_level: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    if quiet {
        return QUIET_FILTER.to_string();
    }
    if let Ok(from_env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !from_env.trim().is_empty() {
            return from_env;
        }
    }
    match settings_level {
        Some(level) if !level.trim().is_empty() => level.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber. Call once, early in `main`.
///
/// Unparseable directives fall back to the default filter.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, settings_level: Option<&str>) {
    let directives = filter_directives(verbose, quiet, settings_level);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn verbose_wins_over_quiet() {
        assert_eq!(filter_directives(true, true, Some("warn")), VERBOSE_FILTER);
        assert_eq!(filter_directives(false, true, Some("warn")), QUIET_FILTER);
    }

    #[test]
    #[serial]
    fn settings_level_applies_without_rust_log() {
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(filter_directives(false, false, Some("warn")), "warn");
        assert_eq!(filter_directives(false, false, Some("  ")), DEFAULT_FILTER);
        assert_eq!(filter_directives(false, false, None), DEFAULT_FILTER);
    }

    #[test]
    #[serial]
    fn rust_log_beats_settings() {
        unsafe {
            std::env::set_var("RUST_LOG", "fedgraph_core=trace");
        }
        let directives = filter_directives(false, false, Some("warn"));
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(directives, "fedgraph_core=trace");
    }

    #[test]
    fn builtin_filters_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }
}
