//! Place Order Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, orders::errors::checkout_status_error, state::State};

/// Place Order Request. The body may be omitted entirely.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    #[serde(alias = "discountCoupen")]
    pub discount_code: Option<String>,
}

async fn parse_request(req: &mut Request) -> Result<PlaceOrderRequest, StatusError> {
    let payload = req
        .payload()
        .await
        .or_400("Could not read request body")?;

    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(PlaceOrderRequest::default());
    }

    serde_json::from_slice(payload).or_400("Invalid order payload")
}

/// Place Order Handler
///
/// Turns the caller's cart into an order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or unknown discount code"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let request = parse_request(req).await?;

    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.claim_or_401()?;

    let order = state
        .app
        .checkout
        .place_order(customer, request.discount_code)
        .await
        .map_err(checkout_status_error)?;

    tracing::info!(order = %order.uuid, total_price = order.total_price, "order placed");

    Ok(StatusCode::CREATED)
}
