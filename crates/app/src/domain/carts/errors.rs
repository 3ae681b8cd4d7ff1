//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("quantity must be greater than 0")]
    InvalidQuantity,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
