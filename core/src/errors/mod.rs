//! Error types returned by the token services.

mod types;


pub use types::{ClaimsError, KeyError, TokenError};

use lt_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Top-level error bridging every failure kind of the token engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Claims(#[from] ClaimsError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Key(#[from] KeyError),
}

impl DomainError {
    /// True for failures that must be mapped to an access-denied response
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::Token(TokenError::MalformedToken)
                | DomainError::Token(TokenError::InvalidSignature)
        )
    }

    /// Stable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Claims(_) => error_codes::CLAIMS_INVALID,
            DomainError::Token(TokenError::MalformedToken) => error_codes::TOKEN_MALFORMED,
            DomainError::Token(TokenError::InvalidSignature) => error_codes::TOKEN_INVALID,
            DomainError::Token(TokenError::TokenGenerationFailed { .. }) => {
                error_codes::INTERNAL_ERROR
            }
            DomainError::Key(_) => error_codes::CONFIGURATION_ERROR,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.code(), self.to_string());
        match self {
            DomainError::Claims(ClaimsError::ReservedKeyConflict { claim })
            | DomainError::Claims(ClaimsError::InvalidRegisteredClaim { claim }) => {
                response.add_detail("claim", claim)
            }
            _ => response,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
