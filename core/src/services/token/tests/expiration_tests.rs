//! Unit tests for the expiration policy

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::token::{ExpirationStrategy, TokenClass};
use crate::services::token::ExpirationPolicy;

use super::{ACCESS_TTL_MS, REFRESH_TTL_MS};

fn policy() -> ExpirationPolicy {
    ExpirationPolicy::new(
        Duration::milliseconds(ACCESS_TTL_MS),
        Duration::milliseconds(REFRESH_TTL_MS),
    )
}

fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

#[test]
fn test_class_lifetimes() {
    let t0 = issued_at();
    let policy = policy();

    assert_eq!(
        policy.compute_expiration(t0, TokenClass::Access),
        t0 + Duration::minutes(15)
    );
    assert_eq!(
        policy.compute_expiration(t0, TokenClass::Refresh),
        t0 + Duration::days(7)
    );
}

#[test]
fn test_access_expires_before_refresh() {
    let t0 = issued_at();
    let policy = policy();
    assert!(
        policy.compute_expiration(t0, TokenClass::Access)
            < policy.compute_expiration(t0, TokenClass::Refresh)
    );
}

#[test]
fn test_zero_and_negative_lifetimes_are_legal() {
    let t0 = issued_at();
    let policy = ExpirationPolicy::new(Duration::zero(), Duration::milliseconds(-5_000));

    assert_eq!(policy.compute_expiration(t0, TokenClass::Access), t0);
    assert_eq!(
        policy.compute_expiration(t0, TokenClass::Refresh),
        t0 - Duration::seconds(5)
    );
}

#[test]
fn test_overflow_saturates() {
    let policy = ExpirationPolicy::new(Duration::days(365_000_000), Duration::days(-365_000_000));
    let t0 = issued_at();

    assert_eq!(
        policy.compute_expiration(t0, TokenClass::Access),
        DateTime::<Utc>::MAX_UTC
    );
    assert_eq!(
        policy.compute_expiration(t0, TokenClass::Refresh),
        DateTime::<Utc>::MIN_UTC
    );
}

#[test]
fn test_explicit_instant_wins() {
    let t0 = issued_at();
    let explicit = t0 + Duration::hours(3);
    let policy = policy();

    assert_eq!(policy.compute_explicit_expiration(t0, explicit), explicit);
    assert_eq!(
        policy.resolve(t0, &ExpirationStrategy::At(explicit)),
        Some(explicit)
    );
}

#[test]
fn test_explicit_instant_ignores_issued_at() {
    let explicit = issued_at() - Duration::minutes(5);
    let policy = policy();

    for t0 in [issued_at(), issued_at() + Duration::days(400), Utc.timestamp_opt(0, 0).unwrap()] {
        assert_eq!(policy.compute_explicit_expiration(t0, explicit), explicit);
    }
}

#[test]
fn test_resolve_per_strategy() {
    let t0 = issued_at();
    let policy = policy();

    assert_eq!(policy.resolve(t0, &ExpirationStrategy::None), None);
    assert_eq!(
        policy.resolve(t0, &ExpirationStrategy::ByClass(TokenClass::Access)),
        Some(t0 + Duration::milliseconds(ACCESS_TTL_MS))
    );
}
