//! In-memory credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::r#trait::{CredentialKey, CredentialStore};
use crate::errors::ClientResult;

/// Volatile credential store backed by a process-local map
///
/// Holds secrets for the lifetime of the process only. The file-backed
/// store in the infra crate is the production implementation; this one
/// serves tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> ClientResult<Option<String>> {
        Ok(self.entries.lock().await.get(&key).cloned())
    }

    async fn set(&self, key: CredentialKey, value: &str) -> ClientResult<()> {
        self.entries.lock().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: CredentialKey) -> ClientResult<()> {
        self.entries.lock().await.remove(&key);
        Ok(())
    }
}
