//! Error types for claims validation, token coding and key resolution

use thiserror::Error;

/// Errors raised while checking a claims set before signing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("Claims set is empty")]
    EmptyClaims,

    #[error("Claim '{claim}' conflicts with the engine-computed value")]
    ReservedKeyConflict { claim: String },

    #[error("Registered claim '{claim}' has an invalid value")]
    InvalidRegisteredClaim { claim: String },

    #[error("Claims must serialize to a JSON object")]
    NotAnObject,

    #[error("Claims are not serializable: {message}")]
    Serialization { message: String },
}

/// Token coding and verification errors
///
/// Both rejection variants are surfaced to callers as "token rejected";
/// neither is ever treated as a valid token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed: {message}")]
    TokenGenerationFailed { message: String },
}

/// Key material and engine configuration errors, fatal at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Signing key too weak: {actual_bits} bits, {required_bits} required")]
    WeakKey { required_bits: usize, actual_bits: usize },

    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Invalid token configuration: {message}")]
    InvalidConfiguration { message: String },
}
