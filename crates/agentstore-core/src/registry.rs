//! Backend registry shared by the settings and secrets stores

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};

/// Future returned by a backend factory
pub type BackendFuture<T> = Pin<Box<dyn Future<Output = StoreResult<Arc<T>>> + Send>>;

/// Factory function type for creating stores
///
/// Receives the application config and the optional user id, exactly as
/// `get_instance` does.
pub type BackendFactory<T> = Box<dyn Fn(AppConfig, Option<String>) -> BackendFuture<T> + Send + Sync>;

/// Definition of a registered backend
pub struct BackendDefinition<T: ?Sized> {
    /// Unique name for this backend
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: BackendFactory<T>,
}

impl<T: ?Sized> std::fmt::Debug for BackendDefinition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Name → factory map for one kind of store
pub struct BackendRegistry<T: ?Sized> {
    kind: &'static str,
    backends: RwLock<HashMap<String, BackendDefinition<T>>>,
}

impl<T: ?Sized> BackendRegistry<T> {
    /// Create an empty registry for stores of `kind` (used in errors and logs)
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            backends: RwLock::new(HashMap::new()),
        }
    }

    /// Register a backend, replacing any previous one with the same name
    pub fn register(&self, name: &str, description: &str, factory: BackendFactory<T>) {
        debug!(kind = self.kind, backend = name, "registering store backend");
        self.backends.write().insert(
            name.to_lowercase(),
            BackendDefinition {
                name: name.to_lowercase(),
                description: description.to_string(),
                factory,
            },
        );
    }

    /// Remove a backend, returns whether it was registered
    pub fn unregister(&self, name: &str) -> bool {
        self.backends.write().remove(&name.to_lowercase()).is_some()
    }

    /// Check if a backend is registered
    pub fn contains(&self, name: &str) -> bool {
        self.backends.read().contains_key(&name.to_lowercase())
    }

    /// List registered backends as (name, description) pairs, sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        let mut backends: Vec<_> = self
            .backends
            .read()
            .values()
            .map(|def| (def.name.clone(), def.description.clone()))
            .collect();
        backends.sort();
        backends
    }

    /// Create a store from the backend registered under `name`
    pub async fn create(
        &self,
        name: &str,
        config: &AppConfig,
        user_id: Option<&str>,
    ) -> StoreResult<Arc<T>> {
        // Build the future under the lock, await it after releasing
        let pending = {
            let backends = self.backends.read();
            let def = backends
                .get(&name.to_lowercase())
                .ok_or_else(|| StoreError::unknown_backend(self.kind, name))?;
            (def.factory)(config.clone(), user_id.map(str::to_string))
        };
        pending.await
    }
}

impl<T: ?Sized> std::fmt::Debug for BackendRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("kind", &self.kind)
            .field("backends", &self.list())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Named: Send + Sync {
        fn name(&self) -> String;
    }

    struct Fixed(String);

    impl Named for Fixed {
        fn name(&self) -> String {
            self.0.clone()
        }
    }

    fn registry() -> BackendRegistry<dyn Named> {
        let registry: BackendRegistry<dyn Named> = BackendRegistry::new("test");
        registry.register(
            "Echo",
            "Echoes the user id",
            Box::new(|_config: AppConfig, user_id: Option<String>| {
                let pending: BackendFuture<dyn Named> = Box::pin(async move {
                    let store: Arc<dyn Named> = Arc::new(Fixed(user_id.unwrap_or_default()));
                    Ok(store)
                });
                pending
            }),
        );
        registry
    }

    #[tokio::test]
    async fn test_create_registered_backend() {
        let registry = registry();
        let store = registry
            .create("echo", &AppConfig::default(), Some("alice"))
            .await
            .unwrap();
        assert_eq!(store.name(), "alice");
    }

    #[tokio::test]
    async fn test_create_unknown_backend() {
        let registry = registry();
        let result = registry.create("redis", &AppConfig::default(), None).await;
        assert!(matches!(
            result,
            Err(StoreError::UnknownBackend { kind: "test", .. })
        ));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let registry = registry();
        assert!(registry.contains("ECHO"));
        assert_eq!(registry.list(), vec![("echo".to_string(), "Echoes the user id".to_string())]);

        assert!(registry.unregister("Echo"));
        assert!(!registry.contains("echo"));
        assert!(!registry.unregister("echo"));
    }
}
