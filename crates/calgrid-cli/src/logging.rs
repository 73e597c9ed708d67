//! Log output for the `calgrid` binary.
//!
//! Logs go to stderr so they never mix with rendered grids on stdout. The
//! filter floor comes from repeated `-v` flags; a set `RUST_LOG` wins over
//! the flags so the usual env-based filtering still works.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose events the verbosity flags control.
const TARGETS: [&str; 3] = ["calgrid", "calgrid_core", "calgrid_store"];

/// Floor for a given number of `-v` flags: warn by default, then info,
/// debug, and trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let directives = TARGETS
        .map(|target| format!("{target}={}", level(verbosity)))
        .join(",");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
