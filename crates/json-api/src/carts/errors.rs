//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::{carts::CartsServiceError, pricing::PricingServiceError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be greater than 0")
        }
        CartsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn pricing_status_error(error: PricingServiceError) -> StatusError {
    error!("failed to price cart: {error}");

    StatusError::internal_server_error()
}
