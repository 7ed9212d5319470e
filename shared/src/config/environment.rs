//! Build environment and logging configuration
//!
//! A client build targets one backend tier for its whole lifetime, so the
//! environment also knows which storefront API base it talks to.

use serde::{Deserialize, Serialize};
use std::env;

/// Backend tier a build points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development builds
    Development,
    /// Internal test builds
    Staging,
    /// Store releases
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_staging(&self) -> bool {
        matches!(self, Environment::Staging)
    }

    /// Detect the environment from process variables
    ///
    /// `EASYMART_ENV` wins; the generic `ENVIRONMENT` and `RUST_ENV` names
    /// are honored for tooling that sets them. Unset or unparseable values
    /// mean development.
    pub fn from_env() -> Self {
        env::var("EASYMART_ENV")
            .or_else(|_| env::var("ENVIRONMENT"))
            .or_else(|_| env::var("RUST_ENV"))
            .unwrap_or_else(|_| String::from("development"))
            .parse()
            .unwrap_or(Environment::Development)
    }

    /// Storefront API base URL for this tier
    pub fn api_base(&self) -> &'static str {
        match self {
            Environment::Development => "https://dev-api.easymart.vn",
            Environment::Staging => "https://staging-api.easymart.vn",
            Environment::Production => "https://api.easymart.vn",
        }
    }

    /// Configuration file name for this environment
    pub fn config_file(&self) -> &str {
        match self {
            Environment::Development => "easymart.development.toml",
            Environment::Staging => "easymart.staging.toml",
            Environment::Production => "easymart.production.toml",
        }
    }

    /// `.env` file name for this environment
    pub fn env_file(&self) -> &str {
        match self {
            Environment::Development => ".env.development",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.production",
        }
    }

    /// Whether debug affordances (verbose logs, route dumps) are allowed
    pub fn is_debug(&self) -> bool {
        match self {
            Environment::Development => true,
            Environment::Staging => true,
            Environment::Production => false,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
///
/// Release builds log warnings only; device logs are user-visible through
/// OS tooling, so anything below that stays in internal builds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable colored output (terminal only)
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Include source location in logs
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            colored: default_colored(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Logging defaults for a tier
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                colored: true,
                source_location: true,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                colored: false,
                source_location: false,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                colored: false,
                source_location: false,
            },
        }
    }
}

fn default_colored() -> bool {
    true
}
