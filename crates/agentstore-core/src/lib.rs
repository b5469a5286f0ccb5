//! agentstore Core
//!
//! Per-user settings and secrets persistence for an agent platform, with
//! pluggable backends. This crate provides:
//!
//! - `SettingsStore` / `SecretsStore` traits and their in-memory backends
//! - A backend registry so hosts select stores by configured name
//! - Environment-derived first-use settings (with auto-provisioning when an
//!   API key is available)
//! - A linting capability that degrades to a no-op when unavailable
//! - Serializable status/readiness reports for diagnostic endpoints
//!
//! ## Stores
//!
//! Stores are always obtained through a factory, bound to one user:
//!
//! ```rust,ignore
//! use agentstore_core::{AppConfig, ProcessEnv, create_settings_store, create_secrets_store};
//!
//! let config = AppConfig::from_env(&ProcessEnv::new());
//! let settings_store = create_settings_store(&config, Some("alice")).await?;
//!
//! // Never "not found": a new user gets defaults
//! let settings = settings_store.load().await?;
//!
//! // Secrets have no default; `None` means nothing stored
//! let secrets_store = create_secrets_store(&config, Some("alice")).await?;
//! assert!(secrets_store.load().await?.is_none());
//! ```

pub mod types;
pub mod config;
pub mod error;
pub mod registry;
pub mod settings;
pub mod secrets;
pub mod linter;
pub mod status;
pub mod logging;

// Re-export commonly used types
pub use types::{Settings, LlmConfig, UserSecrets, CustomSecret};

pub use config::{AppConfig, EnvSource, ProcessEnv, MapEnv, LlmDefaults, ConfigError, ConfigResult};

pub use error::{StoreError, StoreResult, DEFAULT_USER_ID};

pub use settings::{
    SettingsStore, MemorySettingsStore,
    register_settings_backend, create_settings_store, open_settings_store, list_settings_backends,
};

pub use secrets::{
    SecretsStore, MemorySecretsStore,
    register_secrets_backend, create_secrets_store, open_secrets_store, list_secrets_backends,
};

pub use linter::{
    Linter, LintResult, LinterProvider, LinterUnavailable, NoOpLinter,
    register_linter_provider, init_linter, linter, linter_available, linter_resolved,
};

pub use status::{StatusReport, EnvironmentReport, ReadinessReport};
