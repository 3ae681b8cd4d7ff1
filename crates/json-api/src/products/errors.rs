//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Product already exists")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::InvalidRating => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
