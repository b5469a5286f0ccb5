//! Per-user secrets stores
//!
//! - `SecretsStore` trait for implementing backends
//! - `MemorySecretsStore`: in-memory backend, no generated defaults
//! - A registry for selecting backends by name

mod traits;
mod memory_store;
mod registry;

pub use traits::SecretsStore;
pub use memory_store::MemorySecretsStore;
pub use registry::{
    register_secrets_backend, unregister_secrets_backend, has_secrets_backend,
    list_secrets_backends, create_secrets_store, open_secrets_store,
};
