mod expiration_tests;

use serde_json::{json, Value};

use crate::domain::entities::token::ClaimsSet;

pub(crate) const TEST_SECRET: &str = "ssssssssssssssssssssssssssssssss";
pub(crate) const ACCESS_TTL_MS: i64 = 900_000;
pub(crate) const REFRESH_TTL_MS: i64 = 604_800_000;

/// Builds a claims set from a JSON object literal
pub(crate) fn claims(value: Value) -> ClaimsSet {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub(crate) fn subject_claims() -> ClaimsSet {
    claims(json!({ "sub": "u1" }))
}

/// Replaces the first signature character, keeping the token well-formed
pub(crate) fn tamper_signature(token: &str) -> String {
    tamper_signature_at(token, 0)
}

/// Replaces the signature character at `index` with a different base64url character
pub(crate) fn tamper_signature_at(token: &str, index: usize) -> String {
    let (signed, signature) = token.rsplit_once('.').expect("token has a signature segment");
    let mut chars: Vec<char> = signature.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", signed, chars.into_iter().collect::<String>())
}
