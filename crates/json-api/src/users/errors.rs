//! User Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => StatusError::bad_request().brief("User already exists"),
        UsersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::Sql(source) => {
            error!("failed to register user: {source}");

            StatusError::internal_server_error()
        }
    }
}
