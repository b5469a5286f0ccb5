//! Settings store trait

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::types::Settings;

/// Per-user settings persistence
///
/// Each instance is bound to one user id at construction. Implementations:
/// - `MemorySettingsStore`: process-local, lost on restart
/// - Custom backends registered with `register_settings_backend`
///
/// # Example
///
/// ```
/// use agentstore_core::config::AppConfig;
/// use agentstore_core::settings::{MemorySettingsStore, SettingsStore};
///
/// # tokio_test_block_on(async {
/// let store = MemorySettingsStore::get_instance(&AppConfig::default(), Some("alice")).await.unwrap();
/// let settings = store.load().await.unwrap().expect("memory store always yields settings");
/// assert_eq!(settings.agent.as_deref(), Some("CodeActAgent"));
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Backend name (e.g. "memory")
    fn backend(&self) -> &str;

    /// User id this store is bound to
    fn user_id(&self) -> &str;

    /// Load the bound user's settings
    ///
    /// `Ok(None)` means the backend has nothing for this user; a missing
    /// record is never an error.
    async fn load(&self) -> StoreResult<Option<Settings>>;

    /// Replace the bound user's settings
    async fn store(&self, settings: Settings) -> StoreResult<()>;

    /// Build a ready-to-use store bound to `user_id` (`"default"` when `None`)
    async fn get_instance(config: &AppConfig, user_id: Option<&str>) -> StoreResult<Self>
    where
        Self: Sized;
}
