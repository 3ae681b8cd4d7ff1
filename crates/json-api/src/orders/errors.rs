//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::{checkout::CheckoutError, orders::OrdersServiceError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::InvalidDate(value) => {
            StatusError::bad_request().brief(format!("Invalid date: {value}"))
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to list orders: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        CheckoutError::UnknownDiscountCode(code) => {
            StatusError::bad_request().brief(format!("Unknown discount code: {code}"))
        }
        CheckoutError::Pricing(source) => {
            error!("failed to price order: {source}");

            StatusError::internal_server_error()
        }
        CheckoutError::Storage { stage, source } => {
            error!(%stage, "checkout storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
