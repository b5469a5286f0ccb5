//! Deployment status, environment and readiness reports

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{
    EnvSource, DEFAULT_LLM_BASE_URL_VAR, DEFAULT_LLM_MODEL_VAR, FILE_STORE_PATH_VAR, MEMORY_BACKEND,
    OPENROUTER_API_KEY_VAR, SECRETS_STORE_TYPE_VAR, SETTINGS_STORE_TYPE_VAR,
};
use crate::linter::linter_resolved;

/// Variables that are safe to echo back in an environment report
pub const SAFE_ENV_VARS: &[&str] = &[
    "OPENHANDS_RUNTIME",
    "CORS_ALLOWED_ORIGINS",
    "SERVE_FRONTEND",
    FILE_STORE_PATH_VAR,
    "CACHE_DIR",
    SETTINGS_STORE_TYPE_VAR,
    SECRETS_STORE_TYPE_VAR,
    DEFAULT_LLM_MODEL_VAR,
    DEFAULT_LLM_BASE_URL_VAR,
    "DEFAULT_AGENT",
    "DEFAULT_LANGUAGE",
    "CONFIRMATION_MODE",
    "ENABLE_AUTO_LINT",
    "MAX_ITERATIONS",
    "MAX_BUDGET_PER_TASK",
    "SKIP_SETTINGS_MODAL",
    "OPENHANDS_DISABLE_AUTH",
    "DISABLE_SECURITY",
];

/// Placeholder for variables that are not set
pub const NOT_SET: &str = "not_set";

/// Backend assumed when a store type variable is unset
const UNSET_STORE_TYPE: &str = "file";

/// Store backends in use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageTypes {
    pub settings: String,
    pub secrets: String,
}

/// Deployment-level defaults, `None` when the variable is unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConfigReport {
    pub llm_model: Option<String>,
    pub llm_base_url: Option<String>,
    pub agent: Option<String>,
    pub language: Option<String>,
    pub max_iterations: Option<String>,
    pub max_budget: Option<String>,
}

/// Security-related switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReport {
    /// Raw `OPENHANDS_DISABLE_AUTH` value
    pub auth_disabled: Option<String>,
    /// Raw `DISABLE_SECURITY` value
    pub security_disabled: Option<String>,
    pub auto_lint_disabled: bool,
}

/// Overall deployment status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: String,
    pub environment: String,
    pub storage_type: StorageTypes,
    pub default_config: DefaultConfigReport,
    pub security: SecurityReport,
    pub api_key_configured: bool,
    pub skip_settings_modal: bool,
    /// `false` until linter detection has run
    pub linter_available: bool,
}

impl StatusReport {
    /// Snapshot the deployment status
    ///
    /// Never runs linter detection, so a report taken before
    /// `register_linter_provider` leaves the provider usable.
    pub fn collect(env: &dyn EnvSource) -> Self {
        Self {
            status: "running".to_string(),
            environment: "huggingface-spaces".to_string(),
            storage_type: StorageTypes {
                settings: env.var_or(SETTINGS_STORE_TYPE_VAR, UNSET_STORE_TYPE),
                secrets: env.var_or(SECRETS_STORE_TYPE_VAR, UNSET_STORE_TYPE),
            },
            default_config: DefaultConfigReport {
                llm_model: env.var(DEFAULT_LLM_MODEL_VAR),
                llm_base_url: env.var(DEFAULT_LLM_BASE_URL_VAR),
                agent: env.var("DEFAULT_AGENT"),
                language: env.var("DEFAULT_LANGUAGE"),
                max_iterations: env.var("MAX_ITERATIONS"),
                max_budget: env.var("MAX_BUDGET_PER_TASK"),
            },
            security: SecurityReport {
                auth_disabled: env.var("OPENHANDS_DISABLE_AUTH"),
                security_disabled: env.var("DISABLE_SECURITY"),
                auto_lint_disabled: env.var_is("ENABLE_AUTO_LINT", "false"),
            },
            api_key_configured: env.non_empty(OPENROUTER_API_KEY_VAR).is_some(),
            skip_settings_modal: env.var_is("SKIP_SETTINGS_MODAL", "true"),
            linter_available: linter_resolved().unwrap_or(false),
        }
    }
}

/// Safe subset of the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    /// Each safe variable's value, or `"not_set"`
    pub environment_variables: BTreeMap<String, String>,
    pub total_env_vars: usize,
    pub safe_vars_shown: usize,
}

impl EnvironmentReport {
    pub fn collect(env: &dyn EnvSource) -> Self {
        let environment_variables: BTreeMap<String, String> = SAFE_ENV_VARS
            .iter()
            .map(|var| (var.to_string(), env.var_or(var, NOT_SET)))
            .collect();

        Self {
            safe_vars_shown: environment_variables.len(),
            environment_variables,
            total_env_vars: env.len(),
        }
    }
}

/// Why the deployment is or isn't ready
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReasons {
    pub api_key_configured: bool,
    pub memory_storage_enabled: bool,
    pub auth_disabled: bool,
}

/// Whether users can start chatting without a setup step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub ready: bool,
    pub can_skip_setup: bool,
    pub reasons: ReadinessReasons,
    pub next_steps: Vec<String>,
}

impl ReadinessReport {
    /// Ready means an API key is configured and settings live in memory
    pub fn collect(env: &dyn EnvSource) -> Self {
        let api_key_configured = env.non_empty(OPENROUTER_API_KEY_VAR).is_some();
        let memory_storage_enabled = env.var_is(SETTINGS_STORE_TYPE_VAR, MEMORY_BACKEND);
        let ready = api_key_configured && memory_storage_enabled;

        let next_steps = vec![
            if api_key_configured {
                "API key configured ✓"
            } else {
                "Add OPENROUTER_API_KEY to environment"
            },
            if memory_storage_enabled {
                "Memory storage enabled ✓"
            } else {
                "Enable memory storage"
            },
            if ready {
                "Ready to chat! 🎉"
            } else {
                "Complete setup to start chatting"
            },
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            ready,
            can_skip_setup: ready,
            reasons: ReadinessReasons {
                api_key_configured,
                memory_storage_enabled,
                auth_disabled: env.var_is("OPENHANDS_DISABLE_AUTH", "true"),
            },
            next_steps,
        }
    }
}
