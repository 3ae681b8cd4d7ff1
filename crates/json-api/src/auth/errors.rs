//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::auth::{AccessError, AuthServiceError};

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidToken => StatusError::unauthorized().brief("Invalid token"),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::Sql(source) => {
            error!("failed to look up user: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process identity token: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn access_status_error(error: AccessError) -> StatusError {
    match error {
        AccessError::Unauthenticated => {
            StatusError::unauthorized().brief("Missing or invalid Authorization header")
        }
        AccessError::Forbidden => StatusError::forbidden().brief("Access denied"),
    }
}
