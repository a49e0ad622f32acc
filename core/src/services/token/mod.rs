//! Token service module for JWT management
//!
//! This module handles the token lifecycle:
//! - HMAC key resolution with minimum-strength checks
//! - Claims validation before signing
//! - Expiration derivation per token class
//! - Compact JWS signing, verification and unauthenticated payload inspection
//! - Fail-closed expiry evaluation

mod claims_validator;
mod codec;
mod config;
mod expiration;
mod key_manager;
mod provider;
mod resolver;
mod service;

#[cfg(test)]
mod tests;

pub use claims_validator::{to_claims_set, validate as validate_claims};
pub use codec::{parse_payload, JwtCodec};
pub use config::TokenServiceConfig;
pub use expiration::ExpirationPolicy;
pub use key_manager::{minimum_key_bits, SigningKey};
pub use provider::TokenProvider;
pub use resolver::TokenResolver;
pub use service::JwtTokenProvider;
