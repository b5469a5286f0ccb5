//! Secrets store trait

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::types::UserSecrets;

/// Per-user secrets persistence
///
/// Unlike settings, secrets have no generated default: a user with nothing
/// stored loads as `None`, which callers can tell apart from an empty
/// `UserSecrets`.
#[async_trait]
pub trait SecretsStore: Send + Sync {
    /// Backend name (e.g. "memory")
    fn backend(&self) -> &str;

    /// User id this store is bound to
    fn user_id(&self) -> &str;

    /// Load the bound user's secrets, `Ok(None)` when nothing is stored
    async fn load(&self) -> StoreResult<Option<UserSecrets>>;

    /// Replace the bound user's secrets
    async fn store(&self, secrets: UserSecrets) -> StoreResult<()>;

    /// Build a ready-to-use store bound to `user_id` (`"default"` when `None`)
    async fn get_instance(config: &AppConfig, user_id: Option<&str>) -> StoreResult<Self>
    where
        Self: Sized;
}
