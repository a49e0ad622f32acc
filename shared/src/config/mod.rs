//! Configuration consumed by the token services
//!
//! - `token` - signing secret, algorithm and token lifetimes
//! - `environment` - environment detection and logging configuration

pub mod environment;
pub mod token;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use token::TokenConfig;

/// Complete process configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Token signing configuration
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            token: TokenConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// A `.env` file is loaded first when present, then the environment-specific
    /// token file is layered under `TOKEN_*` variables. A missing secret or a
    /// value that does not parse is returned as an error.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let environment = Environment::from_env();
        let token = TokenConfig::load(environment.config_file())?;

        Ok(Self {
            environment,
            token,
            logging: LoggingConfig::for_environment(environment),
        })
    }
}
