//! Logging setup
//!
//! Stores, registries and linter detection log through `tracing`. Secret
//! values are never logged.

mod subscriber;

pub use subscriber::{init, env_filter, LOG_FILTER_VAR, DEFAULT_FILTER};
