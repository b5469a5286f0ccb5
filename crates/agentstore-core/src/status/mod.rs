//! Diagnostic reports about the running deployment
//!
//! These are plain serializable values; serving them over HTTP is the
//! caller's concern.

mod report;

pub use report::{
    StatusReport, StorageTypes, DefaultConfigReport, SecurityReport,
    EnvironmentReport, ReadinessReport, ReadinessReasons,
    SAFE_ENV_VARS, NOT_SET,
};
