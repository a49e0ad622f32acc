//! Structural checks on a claims set before it is signed

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::token::{
    from_numeric_date, ClaimsSet, ExpirationStrategy, EXPIRATION_CLAIM,
};
use crate::errors::ClaimsError;

/// Validates `claims` for issuance under `strategy`.
///
/// `exp` is the only registered claim the engine computes. When the strategy
/// computes it, a caller-supplied `exp` is ambiguous and rejected. With
/// `ExpirationStrategy::None` a caller-supplied `exp` is an explicit override
/// and must be a NumericDate.
pub fn validate(claims: &ClaimsSet, strategy: &ExpirationStrategy) -> Result<(), ClaimsError> {
    if claims.is_empty() {
        return Err(ClaimsError::EmptyClaims);
    }

    if let Some(exp) = claims.get(EXPIRATION_CLAIM) {
        if strategy.sets_expiration() {
            return Err(ClaimsError::ReservedKeyConflict {
                claim: EXPIRATION_CLAIM.to_string(),
            });
        }
        if from_numeric_date(exp).is_none() {
            return Err(ClaimsError::InvalidRegisteredClaim {
                claim: EXPIRATION_CLAIM.to_string(),
            });
        }
    }

    Ok(())
}

/// Converts any serializable value into a claims set
///
/// The value must serialize to a JSON object.
pub fn to_claims_set<T: Serialize + ?Sized>(claims: &T) -> Result<ClaimsSet, ClaimsError> {
    let value = serde_json::to_value(claims).map_err(|e| ClaimsError::Serialization {
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ClaimsError::NotAnObject),
    }
}
