//! Domain entities representing tokens and their claims.

pub mod token;


// Re-export commonly used types
pub use token::{
    expiration_of, from_numeric_date, to_numeric_date, ClaimsSet, ExpirationStrategy, TokenClass,
    EXPIRATION_CLAIM,
};
