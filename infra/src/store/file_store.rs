//! File-backed credential store
//!
//! Persists credentials as a small JSON object on disk. Mobile shells
//! bridge the platform keychain instead; this implementation backs desktop
//! builds and integration tests. Writes go through a temp file and a rename
//! so a crash mid-write never leaves a half-written store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use em_core::errors::{ClientError, ClientResult};
use em_core::gateways::{CredentialKey, CredentialStore};
use em_shared::config::StorageConfig;

/// Credential store writing to a JSON file under the configured data dir
pub struct FileCredentialStore {
    path: PathBuf,
    /// Loaded lazily on first access; `None` until then
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl FileCredentialStore {
    /// Create a store at the configured credentials path
    pub fn new(config: &StorageConfig) -> Self {
        Self::at_path(config.credentials_path())
    }

    /// Create a store at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    async fn read_file(&self) -> ClientResult<HashMap<String, String>> {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => Ok(entries),
                Err(error) => {
                    warn!(
                        error = %error,
                        path = %self.path.display(),
                        "Credential file is corrupt; starting empty"
                    );
                    Ok(HashMap::new())
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(error) => Err(ClientError::storage(format!(
                "read {}: {error}",
                self.path.display()
            ))),
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|error| ClientError::storage(format!("create data dir: {error}")))?;
        }

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|error| ClientError::storage(format!("encode credentials: {error}")))?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, &bytes)
            .await
            .map_err(|error| ClientError::storage(format!("write credentials: {error}")))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|error| ClientError::storage(format!("commit credentials: {error}")))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Persisted credential file");
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: CredentialKey) -> ClientResult<Option<String>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.read_file().await?);
        }
        let entries = cache.get_or_insert_with(HashMap::new);
        Ok(entries.get(key.as_str()).cloned())
    }

    async fn set(&self, key: CredentialKey, value: &str) -> ClientResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.read_file().await?);
        }
        let entries = cache.get_or_insert_with(HashMap::new);
        entries.insert(key.as_str().to_string(), value.to_string());
        self.persist(entries).await
    }

    async fn remove(&self, key: CredentialKey) -> ClientResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.read_file().await?);
        }
        let entries = cache.get_or_insert_with(HashMap::new);
        if entries.remove(key.as_str()).is_some() {
            self.persist(entries).await?;
        }
        Ok(())
    }

    async fn clear_all(&self) -> ClientResult<()> {
        let mut cache = self.cache.lock().await;
        let entries = cache.get_or_insert_with(HashMap::new);
        entries.clear();
        self.persist(entries).await
    }
}
