//! Cart Total Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::pricing_status_error, extensions::*, state::State};

/// Cart Total Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartTotalResponse {
    /// Sum of quantity × price in pence/cents
    pub total: u64,
}

/// Cart Total Handler
///
/// Products that no longer resolve contribute nothing to the total.
#[endpoint(
    tags("carts"),
    summary = "Cart Total",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartTotalResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.claim_or_401()?.username.as_str();

    let total = state
        .app
        .pricing
        .total_for(owner)
        .await
        .map_err(pricing_status_error)?;

    Ok(Json(CartTotalResponse { total }))
}
