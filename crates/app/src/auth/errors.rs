//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::TokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[source] TokenError),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken => Self::InvalidToken,
            TokenError::Encode(_) => Self::Token(error),
        }
    }
}
