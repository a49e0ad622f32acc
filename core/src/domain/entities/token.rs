//! Token entities: claims sets, token classes and expiration strategies.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied claims embedded in a token.
///
/// Key order is irrelevant. Values may be any JSON value.
pub type ClaimsSet = Map<String, Value>;

/// Registered expiration claim, a NumericDate in seconds since the Unix epoch
pub const EXPIRATION_CLAIM: &str = "exp";

/// Category of token selecting which configured lifetime applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Short-lived credential presented on every request
    Access,
    /// Long-lived credential used to obtain new access tokens
    Refresh,
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenClass::Access => write!(f, "access"),
            TokenClass::Refresh => write!(f, "refresh"),
        }
    }
}

impl std::str::FromStr for TokenClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "access" => Ok(TokenClass::Access),
            "refresh" => Ok(TokenClass::Refresh),
            _ => Err(format!("Invalid token class: {}", s)),
        }
    }
}

/// How the `exp` claim of a new token is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationStrategy {
    /// No `exp` is added; the caller controls the claims entirely
    None,
    /// `exp` is derived from the configured lifetime of the class
    ByClass(TokenClass),
    /// `exp` is set to this exact instant
    At(DateTime<Utc>),
}

impl ExpirationStrategy {
    /// Whether the engine computes `exp` under this strategy
    pub fn sets_expiration(&self) -> bool {
        !matches!(self, ExpirationStrategy::None)
    }
}

impl From<TokenClass> for ExpirationStrategy {
    fn from(class: TokenClass) -> Self {
        ExpirationStrategy::ByClass(class)
    }
}

impl From<DateTime<Utc>> for ExpirationStrategy {
    fn from(instant: DateTime<Utc>) -> Self {
        ExpirationStrategy::At(instant)
    }
}

/// Encodes an instant as a NumericDate, truncating sub-second precision
pub fn to_numeric_date(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// Reads a NumericDate claim value.
///
/// Accepts integer and fractional seconds. Returns `None` for anything else
/// or for values outside the representable range.
pub fn from_numeric_date(value: &Value) -> Option<DateTime<Utc>> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(seconds) = number.as_i64() {
        return Utc.timestamp_opt(seconds, 0).single();
    }
    let seconds = number.as_f64()?;
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).floor();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

/// Reads the `exp` claim of a claims set, if present and well-formed
pub fn expiration_of(claims: &ClaimsSet) -> Option<DateTime<Utc>> {
    claims.get(EXPIRATION_CLAIM).and_then(from_numeric_date)
}
