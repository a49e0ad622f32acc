//! Public contract of the token lifecycle engine

use crate::domain::entities::token::{ClaimsSet, ExpirationStrategy};
use crate::errors::DomainResult;

use super::resolver::TokenResolver;

/// Issues, verifies and inspects signed tokens
///
/// `validate` is the only authenticity check. `parse_payload` and
/// `is_expired` read the payload without verifying the signature.
pub trait TokenProvider {
    /// Validates `claims` and signs them, adding `exp` per `strategy`
    fn issue(&self, claims: &ClaimsSet, strategy: ExpirationStrategy) -> DomainResult<String>;

    /// Verifies the signature and returns the claims; does not check expiry
    fn validate(&self, token: &str) -> DomainResult<ClaimsSet>;

    /// Decodes the claims WITHOUT verifying the signature
    fn parse_payload(&self, token: &str) -> DomainResult<ClaimsSet>;

    /// True when the payload's `exp` has passed or is missing or unreadable
    fn is_expired(&self, token: &str) -> bool;

    /// Delegates to `resolver`; no logic of its own
    fn resolve_token<R, T>(&self, resolver: &T, request: &R) -> Option<String>
    where
        Self: Sized,
        R: ?Sized,
        T: TokenResolver<R> + ?Sized,
    {
        resolver.resolve(request)
    }
}
