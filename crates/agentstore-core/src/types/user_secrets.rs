//! User secrets record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named secret the user supplied for use inside agent sessions
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSecret {
    pub secret: String,
    #[serde(default)]
    pub description: String,
}

impl CustomSecret {
    pub fn new(secret: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Debug for CustomSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomSecret")
            .field("secret", &"**********")
            .field("description", &self.description)
            .finish()
    }
}

/// Credential material associated with one user
///
/// An empty record is a valid value and is distinct from "no record stored".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSecrets {
    /// Git provider tokens keyed by provider name (e.g. "github")
    #[serde(default)]
    pub provider_tokens: BTreeMap<String, String>,
    /// User-defined secrets keyed by name
    #[serde(default)]
    pub custom_secrets: BTreeMap<String, CustomSecret>,
}

impl UserSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider token
    pub fn with_provider_token(mut self, provider: impl Into<String>, token: impl Into<String>) -> Self {
        self.provider_tokens.insert(provider.into(), token.into());
        self
    }

    /// Add a custom secret
    pub fn with_custom_secret(mut self, name: impl Into<String>, secret: CustomSecret) -> Self {
        self.custom_secrets.insert(name.into(), secret);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.provider_tokens.is_empty() && self.custom_secrets.is_empty()
    }
}

impl std::fmt::Debug for UserSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSecrets")
            .field("provider_tokens", &self.provider_tokens.keys().collect::<Vec<_>>())
            .field("custom_secrets", &self.custom_secrets)
            .finish()
    }
}
