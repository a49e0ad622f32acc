//! Token signing and lifetime configuration

use config::ConfigError;
use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Signing secret and token lifetimes, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Shared HMAC secret used for signing and verification
    pub secret: String,

    /// Access token lifetime in milliseconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token lifetime in milliseconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,

    /// Signing algorithm name (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: default_access_token_expiry(),
            refresh_token_expiry: default_refresh_token_expiry(),
            algorithm: default_algorithm(),
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in milliseconds
    pub fn with_access_expiry_millis(mut self, millis: i64) -> Self {
        self.access_token_expiry = millis;
        self
    }

    /// Set refresh token lifetime in milliseconds
    pub fn with_refresh_expiry_millis(mut self, millis: i64) -> Self {
        self.refresh_token_expiry = millis;
        self
    }

    /// Set the signing algorithm name
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Create from environment variables
    ///
    /// Reads `TOKEN_SECRET`, `TOKEN_ACCESS_TOKEN_EXPIRY`, `TOKEN_REFRESH_TOKEN_EXPIRY`
    /// and `TOKEN_ALGORITHM`. The secret is required; the others default when
    /// absent and are an error when present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret =
            lookup("TOKEN_SECRET").ok_or_else(|| ConfigError::NotFound("TOKEN_SECRET".into()))?;

        Ok(Self {
            secret,
            access_token_expiry: parse_millis(&lookup, "TOKEN_ACCESS_TOKEN_EXPIRY")?
                .unwrap_or_else(default_access_token_expiry),
            refresh_token_expiry: parse_millis(&lookup, "TOKEN_REFRESH_TOKEN_EXPIRY")?
                .unwrap_or_else(default_refresh_token_expiry),
            algorithm: lookup("TOKEN_ALGORITHM").unwrap_or_else(default_algorithm),
        })
    }

    /// Load from an optional configuration file layered with `TOKEN_*` variables
    ///
    /// The file is looked up with any extension the `config` crate understands
    /// (`token.toml`, `token.yaml`, ...). Environment variables win over the file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("TOKEN").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

fn parse_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<i64>, ConfigError> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::Message(format!("{}={:?}: {}", name, raw, e)))
        })
        .transpose()
}

fn default_access_token_expiry() -> i64 {
    900_000 // 15 minutes
}

fn default_refresh_token_expiry() -> i64 {
    604_800_000 // 7 days
}

fn default_algorithm() -> String {
    String::from("HS256")
}
