//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart succeeds.
#[endpoint(
    tags("carts"),
    summary = "Remove Item from Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart item removed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.claim_or_401()?.username.as_str();

    state
        .app
        .carts
        .remove(owner, &product_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
