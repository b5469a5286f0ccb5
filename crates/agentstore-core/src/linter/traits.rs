//! Linter traits

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use super::result::LintResult;

/// A linting capability
///
/// Implementations:
/// - `NoOpLinter`: installed when no real linter can be acquired
/// - Whatever a registered `LinterProvider` hands back
pub trait Linter: Send + Sync {
    /// Human-readable name of this linter
    fn name(&self) -> &str;

    /// Lint one file and return its findings
    ///
    /// Linting never fails from the caller's point of view: a linter that
    /// cannot process the file reports no findings.
    fn lint(&self, file_path: &Path) -> Vec<LintResult>;
}

/// The real linter could not be acquired
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Linter not available: {0}")]
pub struct LinterUnavailable(pub String);

/// Source of a real linter, probed once at startup
pub trait LinterProvider: Send + Sync {
    /// Name of the provider (used in logs)
    fn name(&self) -> &str;

    /// Try to acquire the linter
    fn acquire(&self) -> Result<Arc<dyn Linter>, LinterUnavailable>;
}
