//! Diagnostic logging setup.
//!
//! Engine and AI events go through `tracing`; the CLI routes them to stderr
//! so they never mix with game output on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins unless `verbose` is
/// set, which forces `debug`. Later calls are no-ops, so tests may call
/// [`crate::run`] repeatedly.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
