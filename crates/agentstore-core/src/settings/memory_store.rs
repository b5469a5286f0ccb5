//! In-memory settings store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info};

use super::traits::SettingsStore;
use crate::config::{AppConfig, EnvSource, LlmDefaults, ProcessEnv, MEMORY_BACKEND};
use crate::error::{bound_user_id, StoreResult};
use crate::types::Settings;

/// Settings store that keeps records in process memory
///
/// Nothing survives the instance. A user with no stored record gets settings
/// synthesised from the environment on every load; if those defaults carry an
/// API key they are stored on first load, so the user keeps them even after
/// the environment changes.
///
/// # Thread Safety
///
/// One `Mutex` guards the map for the whole of `load`, so the
/// check/synthesise/store sequence cannot interleave with a concurrent
/// `store` for the same user.
pub struct MemorySettingsStore {
    settings: Mutex<HashMap<String, Settings>>,
    user_id: String,
    env: Arc<dyn EnvSource>,
}

impl MemorySettingsStore {
    /// Create an empty store bound to `user_id` reading the process environment
    pub(crate) fn new(user_id: impl Into<String>) -> Self {
        Self::with_env(user_id, Arc::new(ProcessEnv::new()))
    }

    /// Create an empty store bound to `user_id` with an explicit environment
    pub fn with_env(user_id: impl Into<String>, env: Arc<dyn EnvSource>) -> Self {
        Self {
            settings: Mutex::new(HashMap::new()),
            user_id: user_id.into(),
            env,
        }
    }

    /// Whether a record is stored for the bound user
    pub fn is_provisioned(&self) -> bool {
        self.settings.lock().contains_key(&self.user_id)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.settings.lock().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Settings handed to a user with nothing stored
    fn default_settings(&self) -> Settings {
        Settings::from_defaults(&LlmDefaults::resolve(self.env.as_ref()))
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    fn backend(&self) -> &str {
        MEMORY_BACKEND
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    async fn load(&self) -> StoreResult<Option<Settings>> {
        let mut settings = self.settings.lock();
        if let Some(stored) = settings.get(&self.user_id) {
            return Ok(Some(stored.clone()));
        }

        let defaults = self.default_settings();
        // Only remember defaults once they make the user usable; keyless
        // defaults are rebuilt on the next load to pick up env changes.
        if defaults.has_api_key() {
            info!(user_id = %self.user_id, "auto-provisioning settings from environment API key");
            settings.insert(self.user_id.clone(), defaults.clone());
        } else {
            debug!(user_id = %self.user_id, "no stored settings, returning defaults");
        }
        Ok(Some(defaults))
    }

    async fn store(&self, settings: Settings) -> StoreResult<()> {
        debug!(user_id = %self.user_id, "storing settings");
        self.settings.lock().insert(self.user_id.clone(), settings);
        Ok(())
    }

    async fn get_instance(_config: &AppConfig, user_id: Option<&str>) -> StoreResult<Self> {
        Ok(Self::new(bound_user_id(user_id)))
    }
}

impl std::fmt::Debug for MemorySettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySettingsStore")
            .field("user_id", &self.user_id)
            .field("records", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapEnv, DEFAULT_LLM_MODEL_VAR, OPENROUTER_API_KEY_VAR};

    fn store_with_env(user_id: &str, env: Arc<MapEnv>) -> MemorySettingsStore {
        MemorySettingsStore::with_env(user_id, env)
    }

    #[tokio::test]
    async fn test_get_instance_binds_default_user() {
        let config = AppConfig::default();

        let store = MemorySettingsStore::get_instance(&config, None).await.unwrap();
        assert_eq!(store.user_id(), "default");
        assert_eq!(store.backend(), "memory");
        assert!(store.is_empty());

        let store = MemorySettingsStore::get_instance(&config, Some("alice")).await.unwrap();
        assert_eq!(store.user_id(), "alice");
    }

    #[tokio::test]
    async fn test_store_then_load_round_trip() {
        let store = store_with_env("dave", Arc::new(MapEnv::new()));
        let settings = Settings::default()
            .with_model("openrouter/openai/gpt-4o")
            .with_agent("BrowsingAgent");

        store.store(settings.clone()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn test_defaults_without_api_key_are_not_persisted() {
        let store = store_with_env("alice", Arc::new(MapEnv::new()));

        let first = store.load().await.unwrap().unwrap();
        assert_eq!(first.llm_api_key, None);
        assert_eq!(first.agent.as_deref(), Some("CodeActAgent"));
        assert!(!first.enable_auto_lint);
        assert!(!store.is_provisioned());

        let second = store.load().await.unwrap().unwrap();
        assert_eq!(first, second);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_defaults_pick_up_env_changes_until_provisioned() {
        let env = Arc::new(MapEnv::new());
        let store = store_with_env("erin", env.clone());

        let first = store.load().await.unwrap().unwrap();
        assert_eq!(
            first.llm_model.as_deref(),
            Some("openrouter/anthropic/claude-3-haiku-20240307")
        );

        env.set(DEFAULT_LLM_MODEL_VAR, "openrouter/openai/gpt-4o");
        let second = store.load().await.unwrap().unwrap();
        assert_eq!(second.llm_model.as_deref(), Some("openrouter/openai/gpt-4o"));
        assert_eq!(second.llm_config.model.as_deref(), Some("openrouter/openai/gpt-4o"));
    }

    #[tokio::test]
    async fn test_defaults_with_api_key_are_persisted() {
        let env = Arc::new(MapEnv::with_vars([(OPENROUTER_API_KEY_VAR, "sk-123")]));
        let store = store_with_env("bob", env.clone());

        let first = store.load().await.unwrap().unwrap();
        assert_eq!(first.llm_api_key.as_deref(), Some("sk-123"));
        assert!(store.is_provisioned());

        env.remove(OPENROUTER_API_KEY_VAR);
        let second = store.load().await.unwrap().unwrap();
        assert_eq!(second.llm_api_key.as_deref(), Some("sk-123"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_api_key_is_not_persisted() {
        let env = Arc::new(MapEnv::with_vars([(OPENROUTER_API_KEY_VAR, "")]));
        let store = store_with_env("judy", env);

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.llm_api_key.as_deref(), Some(""));
        assert!(!store.is_provisioned());
    }

    #[tokio::test]
    async fn test_get_instance_provisions_from_process_env() {
        // Only test in the crate that touches this variable in the process env
        std::env::set_var(OPENROUTER_API_KEY_VAR, "sk-process");
        let store = MemorySettingsStore::get_instance(&AppConfig::default(), Some("bob-process"))
            .await
            .unwrap();

        let first = store.load().await.unwrap().unwrap();
        std::env::remove_var(OPENROUTER_API_KEY_VAR);

        assert_eq!(first.llm_api_key.as_deref(), Some("sk-process"));
        assert!(store.is_provisioned());

        let second = store.load().await.unwrap().unwrap();
        assert_eq!(second.llm_api_key.as_deref(), Some("sk-process"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_only_latest() {
        let store = store_with_env("frank", Arc::new(MapEnv::new()));
        let s1 = Settings::default().with_agent("first");
        let s2 = Settings::default().with_agent("second");

        store.store(s1).await.unwrap();
        store.store(s2.clone()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(s2));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_store_is_idempotent() {
        let store = store_with_env("grace", Arc::new(MapEnv::new()));
        let settings = Settings::default().with_api_key("sk-abc");

        store.store(settings.clone()).await.unwrap();
        store.store(settings.clone()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load().await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn test_stored_record_wins_over_env() {
        let env = Arc::new(MapEnv::with_vars([(OPENROUTER_API_KEY_VAR, "sk-env")]));
        let store = store_with_env("heidi", env);
        let settings = Settings::default().with_api_key("sk-user");

        store.store(settings.clone()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let env = Arc::new(MapEnv::new());
        let u1 = store_with_env("u1", env.clone());
        let u2 = store_with_env("u2", env);

        u1.store(Settings::default().with_agent("agent-u1")).await.unwrap();
        u2.store(Settings::default().with_agent("agent-u2")).await.unwrap();

        let loaded1 = u1.load().await.unwrap().unwrap();
        let loaded2 = u2.load().await.unwrap().unwrap();
        assert_eq!(loaded1.agent.as_deref(), Some("agent-u1"));
        assert_eq!(loaded2.agent.as_deref(), Some("agent-u2"));
    }

    #[tokio::test]
    async fn test_concurrent_load_and_store() {
        let env = Arc::new(MapEnv::with_vars([(OPENROUTER_API_KEY_VAR, "sk-env")]));
        let store = Arc::new(store_with_env("ivan", env));
        let mut handles = vec![];

        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    store.load().await.unwrap();
                } else {
                    store
                        .store(Settings::default().with_agent(format!("agent-{}", i)))
                        .await
                        .unwrap();
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        // Exactly one record for the bound user, whichever write came last
        assert_eq!(store.len(), 1);
        assert!(store.load().await.unwrap().is_some());
    }
}
