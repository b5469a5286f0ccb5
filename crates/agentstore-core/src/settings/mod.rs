//! Per-user settings stores
//!
//! - `SettingsStore` trait for implementing backends
//! - `MemorySettingsStore`: in-memory backend with first-use defaults
//! - A registry for selecting backends by name

mod traits;
mod memory_store;
mod registry;

pub use traits::SettingsStore;
pub use memory_store::MemorySettingsStore;
pub use registry::{
    register_settings_backend, unregister_settings_backend, has_settings_backend,
    list_settings_backends, create_settings_store, open_settings_store,
};
