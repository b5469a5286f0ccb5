//! One-shot linter capability detection
//!
//! A real linter is supplied by registering a `LinterProvider` before the
//! first call to `init_linter`. Detection runs once per process; afterwards
//! the installed linter and the availability flag never change.

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use tracing::{info, warn};

use super::noop::NoOpLinter;
use super::traits::{Linter, LinterProvider};

/// Outcome of linter detection
#[derive(Clone)]
pub struct ResolvedLinter {
    /// The linter callers should use
    pub linter: Arc<dyn Linter>,
    /// Whether `linter` is the real capability rather than the no-op substitute
    pub available: bool,
}

impl std::fmt::Debug for ResolvedLinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedLinter")
            .field("linter", &self.linter.name())
            .field("available", &self.available)
            .finish()
    }
}

static PROVIDER: Lazy<RwLock<Option<Arc<dyn LinterProvider>>>> = Lazy::new(|| RwLock::new(None));

static ACTIVE: OnceCell<ResolvedLinter> = OnceCell::new();

/// Probe `provider` and pick the linter to install
///
/// Any failure to acquire the real linter falls back to `NoOpLinter`.
pub fn resolve_linter(provider: Option<&dyn LinterProvider>) -> ResolvedLinter {
    let Some(provider) = provider else {
        info!("no linter provider registered, linting disabled");
        return ResolvedLinter {
            linter: Arc::new(NoOpLinter::new()),
            available: false,
        };
    };

    match provider.acquire() {
        Ok(linter) => {
            info!(provider = provider.name(), linter = linter.name(), "linter available");
            ResolvedLinter {
                linter,
                available: true,
            }
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "falling back to no-op linter");
            ResolvedLinter {
                linter: Arc::new(NoOpLinter::new()),
                available: false,
            }
        }
    }
}

/// Register the provider of the real linter
///
/// Returns `false` if detection has already run, in which case the provider
/// is ignored.
pub fn register_linter_provider(provider: Arc<dyn LinterProvider>) -> bool {
    if ACTIVE.get().is_some() {
        warn!(provider = provider.name(), "linter already resolved, ignoring provider");
        return false;
    }
    *PROVIDER.write() = Some(provider);
    true
}

/// Run detection if it hasn't run yet and return the outcome
pub fn init_linter() -> &'static ResolvedLinter {
    ACTIVE.get_or_init(|| {
        let provider = PROVIDER.read().clone();
        resolve_linter(provider.as_deref())
    })
}

/// The installed linter
pub fn linter() -> Arc<dyn Linter> {
    Arc::clone(&init_linter().linter)
}

/// Whether the real linter (not the no-op substitute) is installed
pub fn linter_available() -> bool {
    init_linter().available
}

/// Availability flag if detection has already run, without triggering it
pub fn linter_resolved() -> Option<bool> {
    ACTIVE.get().map(|resolved| resolved.available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::{LintResult, LinterUnavailable};
    use std::path::Path;

    struct StubLinter;

    impl Linter for StubLinter {
        fn name(&self) -> &str {
            "stub"
        }

        fn lint(&self, file_path: &Path) -> Vec<LintResult> {
            vec![LintResult::new(file_path.display().to_string(), 1, "error", "stub finding")]
        }
    }

    struct StubProvider {
        installed: bool,
    }

    impl LinterProvider for StubProvider {
        fn name(&self) -> &str {
            "stub-provider"
        }

        fn acquire(&self) -> Result<Arc<dyn Linter>, LinterUnavailable> {
            if self.installed {
                Ok(Arc::new(StubLinter))
            } else {
                Err(LinterUnavailable("stub linter is not installed".to_string()))
            }
        }
    }

    #[test]
    fn test_resolve_without_provider() {
        let resolved = resolve_linter(None);
        assert!(!resolved.available);
        assert_eq!(resolved.linter.name(), "noop");
        assert!(resolved.linter.lint(Path::new("a.py")).is_empty());
    }

    #[test]
    fn test_resolve_with_available_provider() {
        let provider = StubProvider { installed: true };
        let resolved = resolve_linter(Some(&provider));
        assert!(resolved.available);
        assert_eq!(resolved.linter.name(), "stub");
        assert_eq!(resolved.linter.lint(Path::new("a.py")).len(), 1);
    }

    #[test]
    fn test_resolve_with_unavailable_provider() {
        let provider = StubProvider { installed: false };
        let resolved = resolve_linter(Some(&provider));
        assert!(!resolved.available);
        assert_eq!(resolved.linter.name(), "noop");
    }

    #[test]
    fn test_global_detection_is_one_shot() {
        // No provider is registered anywhere in this test binary
        let resolved = init_linter();
        assert!(!resolved.available);
        assert_eq!(linter_resolved(), Some(false));
        assert!(!linter_available());
        assert!(linter().lint(Path::new("main.py")).is_empty());

        let late = Arc::new(StubProvider { installed: true });
        assert!(!register_linter_provider(late));
        assert!(!linter_available());
    }
}
