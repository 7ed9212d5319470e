//! Configuration for the session service

use em_shared::config::AuthConfig;

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Minimum accepted password length
    pub password_min_length: usize,
    /// Maximum accepted password length
    pub password_max_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            password_max_length: 128,
        }
    }
}

impl From<&AuthConfig> for SessionConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            password_min_length: config.password_min_length,
            ..Self::default()
        }
    }
}
