//! Records kept by the stores

mod settings;
mod user_secrets;

pub use settings::{Settings, LlmConfig, DEFAULT_AGENT, DEFAULT_LANGUAGE};
pub use user_secrets::{UserSecrets, CustomSecret};
