//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{Order, OrderDateRange, OrderItem};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub product_id: String,
    pub quantity: u64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub owner: String,
    pub items: Vec<OrderItemResponse>,

    /// When the order was placed
    pub order_date: String,

    /// Post-discount total in pence/cents
    pub total_price: u64,

    pub discount_code: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            owner: order.owner,
            items: order.items.into_iter().map(Into::into).collect(),
            order_date: order.order_date.to_string(),
            total_price: order.total_price,
            discount_code: order.discount_code,
        }
    }
}

/// Order Index Handler
///
/// Lists the caller's orders. `fromDate` and `toDate` are inclusive and take
/// either an RFC 3339 timestamp or a `YYYY-MM-DD` date.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.claim_or_401()?.username.as_str();

    // An empty bound is the same as an absent one.
    let from = present(req.query::<String>("fromDate"));
    let until = present(req.query::<String>("toDate"));

    let range = OrderDateRange::parse(from.as_deref(), until.as_deref())
        .map_err(into_status_error)?;

    let orders = state
        .app
        .orders
        .list_orders(owner, range)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
