//! Configuration for the verification controller

use em_shared::config::AuthConfig;
use em_shared::types::Language;

/// Configuration for the verification controller
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Minimum seconds between code resend requests
    pub resend_cooldown_seconds: i64,
    /// Language for fallback messages when the server sends none
    pub language: Language,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: 60,
            language: Language::default(),
        }
    }
}

impl From<&AuthConfig> for VerificationConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            resend_cooldown_seconds: config.resend_cooldown_seconds,
            language: config.language,
        }
    }
}
