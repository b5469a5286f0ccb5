//! `tracing` subscriber setup
//!
//! The library itself only emits `tracing` events; hosts that don't install
//! their own subscriber can call `init` once at startup.

use tracing_subscriber::EnvFilter;

/// Variable holding the log filter (e.g. `debug`, `agentstore_core=trace`)
pub const LOG_FILTER_VAR: &str = "AGENTSTORE_LOG";

/// Filter used when neither `AGENTSTORE_LOG` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `AGENTSTORE_LOG`, then `RUST_LOG`, then `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a formatting subscriber on stderr
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
