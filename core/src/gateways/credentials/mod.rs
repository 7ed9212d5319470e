//! Credential store gateway module.

pub mod r#trait;
pub use r#trait::{CredentialKey, CredentialStore};

pub mod memory;
pub use memory::MemoryCredentialStore;
