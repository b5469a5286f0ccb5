//! Process environment source

use std::env;

use super::traits::EnvSource;

/// Environment source backed by the process environment
///
/// Variables are read on every lookup, so changes made after construction
/// are visible immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv {
    _private: (), // Prevent direct construction, use new()
}

impl ProcessEnv {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn len(&self) -> usize {
        env::vars_os().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_direct() {
        env::set_var("AGENTSTORE_TEST_PROCESS_ENV", "value");

        let source = ProcessEnv::new();
        assert_eq!(source.var("AGENTSTORE_TEST_PROCESS_ENV"), Some("value".to_string()));
        assert!(source.is_set("AGENTSTORE_TEST_PROCESS_ENV"));
        assert!(source.len() > 0);

        env::remove_var("AGENTSTORE_TEST_PROCESS_ENV");
        assert_eq!(source.var("AGENTSTORE_TEST_PROCESS_ENV"), None);
    }

    #[test]
    fn test_process_env_empty_is_set() {
        env::set_var("AGENTSTORE_TEST_EMPTY_ENV", "");

        let source = ProcessEnv::new();
        assert_eq!(source.var("AGENTSTORE_TEST_EMPTY_ENV"), Some(String::new()));
        assert!(source.is_set("AGENTSTORE_TEST_EMPTY_ENV"));
        assert_eq!(source.var_or("AGENTSTORE_TEST_EMPTY_ENV", "fallback"), "");
        assert_eq!(source.non_empty("AGENTSTORE_TEST_EMPTY_ENV"), None);

        env::remove_var("AGENTSTORE_TEST_EMPTY_ENV");
    }
}
