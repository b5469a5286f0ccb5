//! Environment source trait and configuration errors

/// Read access to environment-style key/value configuration
///
/// Implementations:
/// - `ProcessEnv`: the real process environment
/// - `MapEnv`: an in-memory map for tests and embedding hosts
///
/// A variable set to the empty string is still set: `var` returns
/// `Some("")` for it. Use `non_empty` where an empty value should count as
/// missing.
pub trait EnvSource: Send + Sync {
    /// Look up a variable, `None` only when unset
    fn var(&self, key: &str) -> Option<String>;

    /// Number of variables visible through this source
    fn len(&self) -> usize;

    /// Check if no variables are visible
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a variable, `None` when unset or empty
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }

    /// Check whether a variable is set, possibly to the empty string
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// Look up a variable, falling back to `default` only when unset
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }

    /// Check whether a variable equals `expected` exactly
    fn var_is(&self, key: &str, expected: &str) -> bool {
        self.var(key).as_deref() == Some(expected)
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
