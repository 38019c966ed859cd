//! Logging initialization
//!
//! Logs go to stderr so they never interleave with prompts on stdout.
//! `RUST_LOG` overrides the level picked from the verbosity flags.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Filter from `RUST_LOG`, falling back to the verbosity default
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Initialize tracing once for the process
pub fn init_logging(verbosity: Verbosity) {
    let detailed = matches!(verbosity, Verbosity::Trace);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(matches!(verbosity, Verbosity::Debug | Verbosity::Trace))
        .with_thread_ids(detailed)
        .with_line_number(detailed)
        .try_init();

    debug!("bootcamp started with verbosity {}", verbosity.as_str());
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
