//! Authentication and verification configuration

use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Client-side authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Cooldown between verification code resends, in seconds
    #[serde(default = "default_resend_cooldown")]
    pub resend_cooldown_seconds: i64,

    /// Language for user-facing error messages
    #[serde(default)]
    pub language: Language,

    /// Minimum accepted password length
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: default_resend_cooldown(),
            language: Language::default(),
            password_min_length: default_password_min_length(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let resend_cooldown_seconds = std::env::var("EASYMART_RESEND_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_resend_cooldown);
        let language = std::env::var("EASYMART_LANGUAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            resend_cooldown_seconds,
            language,
            password_min_length: default_password_min_length(),
        }
    }

    /// Set the message language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

fn default_resend_cooldown() -> i64 {
    60
}

fn default_password_min_length() -> usize {
    8
}
