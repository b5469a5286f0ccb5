//! Secrets store backends selectable by name

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::memory_store::MemorySecretsStore;
use super::traits::SecretsStore;
use crate::config::{AppConfig, EnvSource, MEMORY_BACKEND};
use crate::error::StoreResult;
use crate::registry::{BackendFactory, BackendFuture, BackendRegistry};

/// Global registry of secrets backends
static REGISTRY: Lazy<BackendRegistry<dyn SecretsStore>> = Lazy::new(|| {
    let registry = BackendRegistry::new("secrets");

    registry.register(
        MEMORY_BACKEND,
        "In-memory storage, lost on restart",
        Box::new(|config: AppConfig, user_id: Option<String>| {
            let pending: BackendFuture<dyn SecretsStore> = Box::pin(async move {
                let store = MemorySecretsStore::get_instance(&config, user_id.as_deref()).await?;
                Ok(Arc::new(store) as Arc<dyn SecretsStore>)
            });
            pending
        }),
    );

    registry
});

/// Register a secrets backend
pub fn register_secrets_backend(name: &str, description: &str, factory: BackendFactory<dyn SecretsStore>) {
    REGISTRY.register(name, description, factory);
}

/// Unregister a secrets backend (mainly for testing)
pub fn unregister_secrets_backend(name: &str) -> bool {
    REGISTRY.unregister(name)
}

/// Check if a secrets backend is registered
pub fn has_secrets_backend(name: &str) -> bool {
    REGISTRY.contains(name)
}

/// List registered secrets backends as (name, description) pairs
pub fn list_secrets_backends() -> Vec<(String, String)> {
    REGISTRY.list()
}

/// Create the secrets store selected by `config.secrets_store_type`
pub async fn create_secrets_store(
    config: &AppConfig,
    user_id: Option<&str>,
) -> StoreResult<Arc<dyn SecretsStore>> {
    REGISTRY.create(&config.secrets_store_type, config, user_id).await
}

/// Resolve `AppConfig` from `config_path` and `env`, then create the selected secrets store
///
/// A config file that can't be read or parsed is reported as `StoreError::Config`.
pub async fn open_secrets_store(
    env: &dyn EnvSource,
    config_path: Option<&Path>,
    user_id: Option<&str>,
) -> StoreResult<Arc<dyn SecretsStore>> {
    let config = AppConfig::resolve(env, config_path)?;
    create_secrets_store(&config, user_id).await
}
