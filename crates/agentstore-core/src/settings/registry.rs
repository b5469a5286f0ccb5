//! Settings store backends selectable by name

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::memory_store::MemorySettingsStore;
use super::traits::SettingsStore;
use crate::config::{AppConfig, EnvSource, MEMORY_BACKEND};
use crate::error::StoreResult;
use crate::registry::{BackendFactory, BackendFuture, BackendRegistry};

/// Global registry of settings backends
static REGISTRY: Lazy<BackendRegistry<dyn SettingsStore>> = Lazy::new(|| {
    let registry = BackendRegistry::new("settings");

    // Register built-in backends
    registry.register(
        MEMORY_BACKEND,
        "In-memory storage, lost on restart",
        Box::new(|config: AppConfig, user_id: Option<String>| {
            let pending: BackendFuture<dyn SettingsStore> = Box::pin(async move {
                let store = MemorySettingsStore::get_instance(&config, user_id.as_deref()).await?;
                Ok(Arc::new(store) as Arc<dyn SettingsStore>)
            });
            pending
        }),
    );

    registry
});

/// Register a settings backend
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use agentstore_core::config::AppConfig;
/// use agentstore_core::registry::BackendFuture;
/// use agentstore_core::settings::{register_settings_backend, MemorySettingsStore, SettingsStore};
///
/// register_settings_backend(
///     "scratch",
///     "Throwaway store for demos",
///     Box::new(|config: AppConfig, user_id: Option<String>| {
///         let pending: BackendFuture<dyn SettingsStore> = Box::pin(async move {
///             let store = MemorySettingsStore::get_instance(&config, user_id.as_deref()).await?;
///             Ok(Arc::new(store) as Arc<dyn SettingsStore>)
///         });
///         pending
///     }),
/// );
/// ```
pub fn register_settings_backend(name: &str, description: &str, factory: BackendFactory<dyn SettingsStore>) {
    REGISTRY.register(name, description, factory);
}

/// Unregister a settings backend (mainly for testing)
pub fn unregister_settings_backend(name: &str) -> bool {
    REGISTRY.unregister(name)
}

/// Check if a settings backend is registered
pub fn has_settings_backend(name: &str) -> bool {
    REGISTRY.contains(name)
}

/// List registered settings backends as (name, description) pairs
pub fn list_settings_backends() -> Vec<(String, String)> {
    REGISTRY.list()
}

/// Create the settings store selected by `config.settings_store_type`
pub async fn create_settings_store(
    config: &AppConfig,
    user_id: Option<&str>,
) -> StoreResult<Arc<dyn SettingsStore>> {
    REGISTRY.create(&config.settings_store_type, config, user_id).await
}

/// Resolve `AppConfig` from `config_path` and `env`, then create the selected settings store
///
/// A config file that can't be read or parsed is reported as `StoreError::Config`.
pub async fn open_settings_store(
    env: &dyn EnvSource,
    config_path: Option<&Path>,
    user_id: Option<&str>,
) -> StoreResult<Arc<dyn SettingsStore>> {
    let config = AppConfig::resolve(env, config_path)?;
    create_settings_store(&config, user_id).await
}
