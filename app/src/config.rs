//! Application configuration loading
//!
//! Settings come from three layers, lowest to highest precedence:
//!
//! 1. Compiled-in defaults, including the tier's API base URL
//! 2. The environment-specific config file (`easymart.development.toml` and
//!    friends), when present
//! 3. `EASYMART_*` environment variables, with `__` separating nested keys
//!    (`EASYMART_API__BASE_URL` overrides `api.base_url`)
//!
//! The matching `.env` file is loaded first so variables defined there
//! count as environment variables.

use config::{Config, ConfigError, Environment as EnvSource, File};

use em_shared::config::{AppConfig, Environment};

/// Load configuration for the environment named by `EASYMART_ENV`
pub fn load() -> Result<AppConfig, ConfigError> {
    load_for(Environment::from_env())
}

/// Load configuration for a specific environment
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    let loader = Config::builder()
        .set_default("api.base_url", environment.api_base())?
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(EnvSource::with_prefix("EASYMART").separator("__"))
        .build()?;

    let mut config: AppConfig = loader.try_deserialize()?;
    config.environment = environment;
    Ok(config)
}
