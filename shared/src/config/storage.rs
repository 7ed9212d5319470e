//! Local credential storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the on-device credential store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding client data files
    pub data_dir: PathBuf,

    /// File name of the credential store inside `data_dir`
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            credentials_file: default_credentials_file(),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let data_dir = std::env::var("EASYMART_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self {
            data_dir,
            credentials_file: default_credentials_file(),
        }
    }

    /// Full path of the credential store file
    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(&self.credentials_file)
    }
}

fn default_credentials_file() -> String {
    String::from("credentials.json")
}
