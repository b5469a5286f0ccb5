//! Environment-derived LLM defaults for first-use settings

use super::traits::EnvSource;

/// Variable holding the default model identifier
pub const DEFAULT_LLM_MODEL_VAR: &str = "DEFAULT_LLM_MODEL";
/// Variable holding the default API base URL
pub const DEFAULT_LLM_BASE_URL_VAR: &str = "DEFAULT_LLM_BASE_URL";
/// Variable holding the API key used to auto-provision new users
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Model used when `DEFAULT_LLM_MODEL` is unset
pub const FALLBACK_LLM_MODEL: &str = "openrouter/anthropic/claude-3-haiku-20240307";
/// Base URL used when `DEFAULT_LLM_BASE_URL` is unset
pub const FALLBACK_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// LLM connection values resolved from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct LlmDefaults {
    pub model: String,
    pub base_url: String,
    /// `None` when `OPENROUTER_API_KEY` is unset, `Some("")` when set empty
    pub api_key: Option<String>,
}

impl LlmDefaults {
    /// Resolve defaults from an environment source
    ///
    /// Reads the source on every call; nothing is cached.
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            model: env.var_or(DEFAULT_LLM_MODEL_VAR, FALLBACK_LLM_MODEL),
            base_url: env.var_or(DEFAULT_LLM_BASE_URL_VAR, FALLBACK_LLM_BASE_URL),
            api_key: env.var(OPENROUTER_API_KEY_VAR),
        }
    }
}

impl Default for LlmDefaults {
    fn default() -> Self {
        Self {
            model: FALLBACK_LLM_MODEL.to_string(),
            base_url: FALLBACK_LLM_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for LlmDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmDefaults")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "**********"))
            .finish()
    }
}
