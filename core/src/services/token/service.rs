//! Token lifecycle engine implementation

use chrono::{DateTime, Utc};
use lt_shared::config::TokenConfig;
use serde::Serialize;

use crate::domain::entities::token::{
    expiration_of as claims_expiration, ClaimsSet, ExpirationStrategy, TokenClass,
};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::claims_validator;
use super::codec::{self, JwtCodec};
use super::config::TokenServiceConfig;
use super::expiration::ExpirationPolicy;
use super::key_manager::SigningKey;
use super::provider::TokenProvider;

/// Issues and verifies HMAC-signed JWTs
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct JwtTokenProvider {
    codec: JwtCodec,
    policy: ExpirationPolicy,
}

impl JwtTokenProvider {
    /// Creates a new token provider
    ///
    /// # Arguments
    ///
    /// * `config` - Secret, algorithm and token lifetimes
    ///
    /// # Returns
    ///
    /// A new `JwtTokenProvider`, or `KeyError` if the secret is too weak for
    /// the algorithm or the algorithm is not HMAC
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        let key = SigningKey::resolve(config.secret.as_bytes(), config.algorithm)?;
        let policy = ExpirationPolicy::new(config.access_token_ttl, config.refresh_token_ttl);
        Ok(Self::with_key(key, policy))
    }

    /// Creates a provider from loaded process configuration
    pub fn from_token_config(config: &TokenConfig) -> DomainResult<Self> {
        Self::new(TokenServiceConfig::try_from(config)?)
    }

    /// Creates a provider from an already resolved key
    pub fn with_key(key: SigningKey, policy: ExpirationPolicy) -> Self {
        tracing::info!(
            algorithm = ?key.algorithm(),
            key_bits = key.bits(),
            access_ttl_ms = policy.ttl(TokenClass::Access).num_milliseconds(),
            refresh_ttl_ms = policy.ttl(TokenClass::Refresh).num_milliseconds(),
            "Initialized token provider"
        );

        Self {
            codec: JwtCodec::new(key),
            policy,
        }
    }

    /// Expiration policy in use
    pub fn policy(&self) -> &ExpirationPolicy {
        &self.policy
    }

    /// Issues a token using `now` as the issuance instant
    pub fn issue_at(
        &self,
        claims: &ClaimsSet,
        strategy: ExpirationStrategy,
        now: DateTime<Utc>,
    ) -> DomainResult<String> {
        claims_validator::validate(claims, &strategy)?;

        let expires_at = self.policy.resolve(now, &strategy);
        tracing::debug!(
            strategy = ?strategy,
            expires_at = ?expires_at,
            claim_count = claims.len(),
            "Issuing token"
        );

        self.codec.encode(claims, expires_at).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            DomainError::from(e)
        })
    }

    /// Issues a token from any value serializing to a JSON object
    pub fn issue_serializable<T: Serialize + ?Sized>(
        &self,
        claims: &T,
        strategy: ExpirationStrategy,
    ) -> DomainResult<String> {
        let claims = claims_validator::to_claims_set(claims)?;
        self.issue(&claims, strategy)
    }

    /// Evaluates expiry against `now`, failing closed
    ///
    /// Reads the payload without verifying the signature. Unparseable
    /// tokens, empty payloads and missing or non-numeric `exp` all count
    /// as expired.
    pub fn is_expired_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        match self.expiration_of(token) {
            Some(expires_at) => now >= expires_at,
            None => true,
        }
    }

    /// Unverified `exp` of a token, if present and readable
    pub fn expiration_of(&self, token: &str) -> Option<DateTime<Utc>> {
        codec::parse_payload(token)
            .ok()
            .and_then(|claims| claims_expiration(&claims))
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue(&self, claims: &ClaimsSet, strategy: ExpirationStrategy) -> DomainResult<String> {
        self.issue_at(claims, strategy, Utc::now())
    }

    fn validate(&self, token: &str) -> DomainResult<ClaimsSet> {
        self.codec.decode(token).map_err(|e| {
            match e {
                TokenError::InvalidSignature => tracing::warn!("Token signature rejected"),
                _ => tracing::debug!(error = %e, "Token rejected"),
            }
            DomainError::from(e)
        })
    }

    fn parse_payload(&self, token: &str) -> DomainResult<ClaimsSet> {
        Ok(codec::parse_payload(token)?)
    }

    fn is_expired(&self, token: &str) -> bool {
        self.is_expired_at(token, Utc::now())
    }
}
