//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use lt_shared::config::TokenConfig;

use crate::errors::KeyError;

/// Immutable engine configuration, built once at startup and injected
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC signing secret
    pub secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Lifetime of access tokens
    pub access_token_ttl: Duration,
    /// Lifetime of refresh tokens
    pub refresh_token_ttl: Duration,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with HS256 and millisecond lifetimes
    ///
    /// `i64::MIN` is clamped to the most negative representable lifetime.
    pub fn new(secret: impl Into<String>, access_ttl_millis: i64, refresh_ttl_millis: i64) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::milliseconds(access_ttl_millis.max(-i64::MAX)),
            refresh_token_ttl: Duration::milliseconds(refresh_ttl_millis.max(-i64::MAX)),
        }
    }

    /// Overrides the signing algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

fn lifetime(name: &str, millis: i64) -> Result<Duration, KeyError> {
    Duration::try_milliseconds(millis).ok_or_else(|| KeyError::InvalidConfiguration {
        message: format!("{} of {}ms is out of range", name, millis),
    })
}

impl TryFrom<&TokenConfig> for TokenServiceConfig {
    type Error = KeyError;

    /// Rejects the built-in development secret, unknown algorithms and
    /// lifetimes that do not fit a `Duration`.
    fn try_from(config: &TokenConfig) -> Result<Self, Self::Error> {
        if config.is_using_default_secret() {
            return Err(KeyError::InvalidConfiguration {
                message: "token secret is the built-in development default".to_string(),
            });
        }

        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| KeyError::UnsupportedAlgorithm {
                algorithm: config.algorithm.clone(),
            })?;

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            access_token_ttl: lifetime("access_token_expiry", config.access_token_expiry)?,
            refresh_token_ttl: lifetime("refresh_token_expiry", config.refresh_token_expiry)?,
        })
    }
}
