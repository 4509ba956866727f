//! Terminal output helpers.
//!
//! Status messages go to stderr; graph output written by commands goes to
//! stdout, so the two never mix when piping.
//!
//! ```no_run
//! use fedgraph_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Graph written to graph.json");
//! ui::warning("2 applications were skipped");
//! ```

mod format;
mod messages;

pub use format::{format_summary, pluralize};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them off a terminal;
/// otherwise colors follow whether stderr is attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once, at startup, whether status messages are colored.
pub fn init_colors(no_color: bool) {
    console::set_colors_enabled_stderr(!no_color && should_use_color());
}

pub(crate) fn colors_enabled() -> bool {
    console::colors_enabled_stderr()
}
