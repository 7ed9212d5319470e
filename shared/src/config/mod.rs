//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `api` - Storefront API endpoint and HTTP client configuration
//! - `auth` - Authentication and verification configuration
//! - `environment` - Environment detection and logging configuration
//! - `storage` - On-device credential storage configuration

pub mod api;
pub mod auth;
pub mod environment;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use environment::{Environment, LoggingConfig};
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Storefront API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Credential storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig::for_environment(Environment::Development),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::for_environment(Environment::Production),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            api: ApiConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
