//! Linter detection order across a host's startup
//!
//! Runs in its own test binary so the process-wide linter state starts
//! unresolved.

use std::path::Path;
use std::sync::Arc;

use agentstore_core::config::MapEnv;
use agentstore_core::{
    init_linter, linter_available, linter_resolved, register_linter_provider, LintResult, Linter,
    LinterProvider, LinterUnavailable, StatusReport,
};

struct RuffLinter;

impl Linter for RuffLinter {
    fn name(&self) -> &str {
        "ruff"
    }

    fn lint(&self, file_path: &Path) -> Vec<LintResult> {
        vec![LintResult::new(file_path.display().to_string(), 1, "warning", "unused import")]
    }
}

struct RuffProvider;

impl LinterProvider for RuffProvider {
    fn name(&self) -> &str {
        "ruff-provider"
    }

    fn acquire(&self) -> Result<Arc<dyn Linter>, LinterUnavailable> {
        Ok(Arc::new(RuffLinter))
    }
}

/// A health check taken before the provider is registered must not lock in
/// the no-op linter.
#[test]
fn test_status_report_before_provider_registration() {
    let early = StatusReport::collect(&MapEnv::new());
    assert!(!early.linter_available);
    assert_eq!(linter_resolved(), None);

    assert!(register_linter_provider(Arc::new(RuffProvider)));

    let resolved = init_linter();
    assert!(resolved.available);
    assert_eq!(resolved.linter.name(), "ruff");
    assert!(linter_available());
    assert_eq!(linter_resolved(), Some(true));

    let later = StatusReport::collect(&MapEnv::new());
    assert!(later.linter_available);
}
