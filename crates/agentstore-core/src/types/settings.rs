//! User settings record

use serde::{Deserialize, Serialize};

use crate::config::LlmDefaults;

/// Agent used when nothing else has been chosen
pub const DEFAULT_AGENT: &str = "CodeActAgent";

/// Interface language used when nothing else has been chosen
pub const DEFAULT_LANGUAGE: &str = "en";

/// Raw LLM configuration carried alongside the flat settings fields
///
/// Duplicates `llm_model` / `llm_base_url` / `llm_api_key` for backends that
/// consume the nested shape directly.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(&self.api_key))
            .finish()
    }
}

/// An end user's preferred agent configuration
///
/// The serialized field names are part of the external contract and must not
/// be renamed.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Model identifier (e.g. `openrouter/anthropic/claude-3-haiku-20240307`)
    #[serde(default)]
    pub llm_model: Option<String>,
    /// API base URL
    #[serde(default)]
    pub llm_base_url: Option<String>,
    /// API key, `None` when the user has not supplied one
    #[serde(default)]
    pub llm_api_key: Option<String>,
    /// Agent name
    #[serde(default)]
    pub agent: Option<String>,
    /// Interface language
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub confirmation_mode: bool,
    /// Security analyzer selection, empty when none is selected
    #[serde(default)]
    pub security_analyzer: Option<String>,
    #[serde(default)]
    pub enable_auto_lint: bool,
    #[serde(default)]
    pub disable_color: bool,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

impl Settings {
    /// Build the first-use settings record from resolved LLM defaults
    pub fn from_defaults(defaults: &LlmDefaults) -> Self {
        Self {
            llm_model: Some(defaults.model.clone()),
            llm_base_url: Some(defaults.base_url.clone()),
            llm_api_key: defaults.api_key.clone(),
            agent: Some(DEFAULT_AGENT.to_string()),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            confirmation_mode: false,
            security_analyzer: Some(String::new()),
            enable_auto_lint: false,
            disable_color: false,
            llm_config: LlmConfig {
                model: Some(defaults.model.clone()),
                base_url: Some(defaults.base_url.clone()),
                api_key: defaults.api_key.clone(),
            },
        }
    }

    /// Whether these settings carry a usable (non-empty) API key
    pub fn has_api_key(&self) -> bool {
        self.llm_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Set the model, keeping `llm_config` in step
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.llm_config.model = Some(model.clone());
        self.llm_model = Some(model);
        self
    }

    /// Set the API base URL, keeping `llm_config` in step
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.llm_config.base_url = Some(base_url.clone());
        self.llm_base_url = Some(base_url);
        self
    }

    /// Set the API key, keeping `llm_config` in step
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.llm_config.api_key = Some(key.clone());
        self.llm_api_key = Some(key);
        self
    }

    /// Set the agent name
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("llm_model", &self.llm_model)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_api_key", &redacted(&self.llm_api_key))
            .field("agent", &self.agent)
            .field("language", &self.language)
            .field("confirmation_mode", &self.confirmation_mode)
            .field("security_analyzer", &self.security_analyzer)
            .field("enable_auto_lint", &self.enable_auto_lint)
            .field("disable_color", &self.disable_color)
            .field("llm_config", &self.llm_config)
            .finish()
    }
}

pub(crate) fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "**********")
}
