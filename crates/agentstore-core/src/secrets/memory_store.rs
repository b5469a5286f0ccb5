//! In-memory secrets store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use super::traits::SecretsStore;
use crate::config::{AppConfig, MEMORY_BACKEND};
use crate::error::{bound_user_id, StoreResult};
use crate::types::UserSecrets;

/// Secrets store that keeps records in process memory
///
/// Secrets are lost when the store is dropped.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
#[derive(Debug)]
pub struct MemorySecretsStore {
    secrets: RwLock<HashMap<String, UserSecrets>>,
    user_id: String,
}

impl MemorySecretsStore {
    /// Create an empty store bound to `user_id`
    pub(crate) fn new(user_id: impl Into<String>) -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
            user_id: user_id.into(),
        }
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SecretsStore for MemorySecretsStore {
    fn backend(&self) -> &str {
        MEMORY_BACKEND
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    async fn load(&self) -> StoreResult<Option<UserSecrets>> {
        Ok(self.secrets.read().get(&self.user_id).cloned())
    }

    async fn store(&self, secrets: UserSecrets) -> StoreResult<()> {
        debug!(user_id = %self.user_id, "storing secrets");
        self.secrets.write().insert(self.user_id.clone(), secrets);
        Ok(())
    }

    async fn get_instance(_config: &AppConfig, user_id: Option<&str>) -> StoreResult<Self> {
        Ok(Self::new(bound_user_id(user_id)))
    }
}
