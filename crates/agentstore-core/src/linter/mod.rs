//! Linting capability with a no-op fallback
//!
//! Callers lint unconditionally through `linter()`; when no real linter can
//! be acquired the installed implementation reports no findings, and
//! `linter_available()` says so for diagnostics.
//!
//! ```rust
//! use std::path::Path;
//! use agentstore_core::linter::{linter, linter_available};
//!
//! let findings = linter().lint(Path::new("app.py"));
//! if !linter_available() {
//!     assert!(findings.is_empty());
//! }
//! ```

mod traits;
mod result;
mod noop;
mod detect;

pub use traits::{Linter, LinterProvider, LinterUnavailable};
pub use result::LintResult;
pub use noop::NoOpLinter;
pub use detect::{
    ResolvedLinter, resolve_linter, register_linter_provider, init_linter, linter, linter_available,
    linter_resolved,
};
