//! Configuration sources
//!
//! - `AppConfig`: application configuration passed to store factories
//! - `EnvSource`: injectable environment (`ProcessEnv`, `MapEnv`)
//! - `LlmDefaults`: environment-derived defaults for first-use settings

mod traits;
mod env;
mod memory;
mod defaults;
mod file;

pub use traits::{EnvSource, ConfigError, ConfigResult};
pub use env::ProcessEnv;
pub use memory::MapEnv;
pub use defaults::{
    LlmDefaults,
    DEFAULT_LLM_MODEL_VAR, DEFAULT_LLM_BASE_URL_VAR, OPENROUTER_API_KEY_VAR,
    FALLBACK_LLM_MODEL, FALLBACK_LLM_BASE_URL,
};
pub use file::{
    AppConfig,
    SETTINGS_STORE_TYPE_VAR, SECRETS_STORE_TYPE_VAR, FILE_STORE_PATH_VAR, MEMORY_BACKEND,
};
