//! Expiration policy for issued tokens

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::token::{ExpirationStrategy, TokenClass};

/// Maps token classes to configured lifetimes
///
/// Zero or negative lifetimes are accepted and yield tokens that are
/// already expired at issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl ExpirationPolicy {
    pub fn new(access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            access_ttl,
            refresh_ttl,
        }
    }

    /// Configured lifetime of `class`
    pub fn ttl(&self, class: TokenClass) -> Duration {
        match class {
            TokenClass::Access => self.access_ttl,
            TokenClass::Refresh => self.refresh_ttl,
        }
    }

    /// Absolute expiration of a token of `class` issued at `issued_at`
    ///
    /// Saturates at the representable range of `DateTime<Utc>`.
    pub fn compute_expiration(&self, issued_at: DateTime<Utc>, class: TokenClass) -> DateTime<Utc> {
        let ttl = self.ttl(class);
        issued_at.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Expiration for an explicitly requested instant
    ///
    /// `issued_at` is ignored: the instant is absolute and is returned as given,
    /// even when it lies before `issued_at`. The parameter keeps the signature
    /// aligned with `compute_expiration`.
    pub fn compute_explicit_expiration(
        &self,
        _issued_at: DateTime<Utc>,
        explicit: DateTime<Utc>,
    ) -> DateTime<Utc> {
        explicit
    }

    /// Resolves the `exp` instant for a strategy, `None` when no `exp` is set
    pub fn resolve(
        &self,
        issued_at: DateTime<Utc>,
        strategy: &ExpirationStrategy,
    ) -> Option<DateTime<Utc>> {
        match strategy {
            ExpirationStrategy::None => None,
            ExpirationStrategy::ByClass(class) => Some(self.compute_expiration(issued_at, *class)),
            ExpirationStrategy::At(instant) => {
                Some(self.compute_explicit_expiration(issued_at, *instant))
            }
        }
    }
}
