//! Client configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate and
//! overlaid with environment variables prefixed with `QILIN__`
//! (e.g. `QILIN__AUTH__TOKEN`).

pub mod auth;
pub mod logging;
pub mod transport;

use serde::{Deserialize, Serialize};

use self::auth::AuthSettings;
use self::logging::LoggingConfig;
use self::transport::TransportConfig;

use crate::error::AppError;

/// Root SDK configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute base URL of the Qilin Engine API.
    pub endpoint: String,
    /// Credentials applied to every request.
    #[serde(default)]
    pub auth: AuthSettings,
    /// HTTP transport settings.
    #[serde(default)]
    pub transport: TransportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file merged with `QILIN__*` environment
    /// variables. A missing file is not an error as long as the environment
    /// supplies the required keys.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("QILIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
