//! Store error types

use thiserror::Error;

use crate::config::ConfigError;

/// User id bound when the caller doesn't supply one
pub const DEFAULT_USER_ID: &str = "default";

/// Errors that can occur during store operations
///
/// "Not found" is never an error: loads report absence as a value.
/// The in-memory backends never return any of these.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown {kind} store backend: {name}")]
    UnknownBackend { kind: &'static str, name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// Create an unknown backend error
    pub fn unknown_backend(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownBackend {
            kind,
            name: name.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Resolve the user id a store binds to, an empty id counts as missing
pub(crate) fn bound_user_id(user_id: Option<&str>) -> String {
    user_id
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
        .to_string()
}
