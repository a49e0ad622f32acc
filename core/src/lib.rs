//! # Lime Token Core
//!
//! Issues, signs and validates compact signed tokens carrying caller-supplied
//! claims plus a derived expiration time. This crate contains the domain
//! types, the token lifecycle engine and its error types.
//!
//! Wire format: `base64url(header).base64url(payload).base64url(signature)`,
//! HMAC-SHA2 signatures, `exp` as integer seconds since the Unix epoch.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{ClaimsSet, ExpirationStrategy, TokenClass, EXPIRATION_CLAIM};
pub use errors::{ClaimsError, DomainError, DomainResult, KeyError, TokenError};
pub use services::{
    ExpirationPolicy, JwtCodec, JwtTokenProvider, SigningKey, TokenProvider, TokenResolver,
    TokenServiceConfig,
};
