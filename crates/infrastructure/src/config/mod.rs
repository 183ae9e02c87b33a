//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then environment variables such as
//! `LAUNCHCHECK_BATCH__CONCURRENCY=4` or `LAUNCHCHECK_WEATHER__TIMEOUT_SECS=5`.

mod logging;

use std::collections::HashMap;
use std::path::Path;

use application::BatchConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use logging::{LogFormat, LoggingConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LAUNCHCHECK";

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "launchcheck";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Batch orchestration settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the process environment
    ///
    /// With `path` the file must exist; without it `launchcheck.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigLoadError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., LAUNCHCHECK_BATCH__CONCURRENCY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.weather.timeout_secs == 0 {
            return Err(ConfigLoadError::Invalid(
                "weather.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.batch.concurrency == 0 {
            return Err(ConfigLoadError::Invalid(
                "batch.concurrency must be greater than zero".into(),
            ));
        }
        if !self.weather.secure_base_url.starts_with("https://") {
            return Err(ConfigLoadError::Invalid(format!(
                "weather.secure_base_url must use https: {}",
                self.weather.secure_base_url
            )));
        }
        if !self.weather.plaintext_base_url.starts_with("http://") {
            return Err(ConfigLoadError::Invalid(format!(
                "weather.plaintext_base_url must use http: {}",
                self.weather.plaintext_base_url
            )));
        }
        Ok(())
    }
}
