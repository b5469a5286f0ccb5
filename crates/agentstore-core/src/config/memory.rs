//! In-memory environment source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::EnvSource;

/// In-memory environment source for testing
///
/// Values can be changed after construction, which lets tests simulate a
/// variable being set or cleared between calls.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    /// Create a new empty environment
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create an environment with initial variables
    pub fn with_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Set a variable
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    /// Remove a variable
    pub fn remove(&self, key: &str) {
        self.vars.write().remove(key);
    }

    /// Remove every variable
    pub fn clear(&self) {
        self.vars.write().clear();
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.vars.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env() {
        let env = MapEnv::with_vars([("A", "1"), ("EMPTY", "")]);

        assert_eq!(env.var("A"), Some("1".to_string()));
        assert_eq!(env.var("EMPTY"), Some(String::new()));
        assert_eq!(env.non_empty("EMPTY"), None);
        assert_eq!(env.var_or("EMPTY", "fallback"), "");
        assert_eq!(env.var("MISSING"), None);
        assert_eq!(env.var_or("MISSING", "fallback"), "fallback");
        assert_eq!(env.len(), 2);
        assert!(!env.is_empty());

        env.set("B", "2");
        assert!(env.var_is("B", "2"));

        env.remove("A");
        assert!(!env.is_set("A"));

        env.clear();
        assert_eq!(env.len(), 0);
        assert!(env.is_empty());
    }
}
