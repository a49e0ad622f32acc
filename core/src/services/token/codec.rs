//! Compact JWS encoding and decoding of claims sets
//!
//! Tokens are three base64url segments `header.payload.signature`. The
//! payload is the claims object, with `exp` as a NumericDate in seconds.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Header, Validation};
use serde_json::Value;

use crate::domain::entities::token::{to_numeric_date, ClaimsSet, EXPIRATION_CLAIM};
use crate::errors::TokenError;

use super::key_manager::SigningKey;

/// Signs and verifies tokens with a single resolved key
#[derive(Debug, Clone)]
pub struct JwtCodec {
    key: SigningKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(key: SigningKey) -> Self {
        // Verification establishes authenticity only; freshness is a separate step
        let mut validation = Validation::new(key.algorithm());
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self { key, validation }
    }

    /// The key this codec signs and verifies with
    pub fn key(&self) -> &SigningKey {
        &self.key
    }

    /// Serializes `claims`, plus `exp` when `expires_at` is given, and signs them
    ///
    /// HMAC signatures are deterministic: identical claims and key produce the
    /// identical token.
    pub fn encode(
        &self,
        claims: &ClaimsSet,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<String, TokenError> {
        let header = Header::new(self.key.algorithm());

        let result = match expires_at {
            Some(expires_at) => {
                let mut payload = claims.clone();
                payload.insert(
                    EXPIRATION_CLAIM.to_string(),
                    Value::from(to_numeric_date(expires_at)),
                );
                encode(&header, &payload, self.key.encoding_key())
            }
            None => encode(&header, claims, self.key.encoding_key()),
        };

        result.map_err(|e| TokenError::TokenGenerationFailed {
            message: e.to_string(),
        })
    }

    /// Verifies the signature and, only then, returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(ClaimsSet)` - Signature matches this codec's key
    /// * `Err(TokenError::InvalidSignature)` - Signature or algorithm mismatch
    /// * `Err(TokenError::MalformedToken)` - Wrong segment count, bad base64 or JSON
    pub fn decode(&self, token: &str) -> Result<ClaimsSet, TokenError> {
        decode::<ClaimsSet>(token, self.key.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::MalformedToken,
            })
    }
}

/// Decodes the payload segment WITHOUT verifying the signature.
///
/// This is not an authenticity check: anyone can forge a token that parses
/// here. Use it only to inspect claims of tokens that are, or will be,
/// verified by other means.
pub fn parse_payload(token: &str) -> Result<ClaimsSet, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::MalformedToken);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::MalformedToken)?;

    serde_json::from_slice::<ClaimsSet>(&bytes).map_err(|_| TokenError::MalformedToken)
}
