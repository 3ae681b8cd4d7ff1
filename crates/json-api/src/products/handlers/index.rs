//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductFilter;

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
    state::State,
};

fn unsigned_query(req: &Request, key: &str) -> Result<Option<u64>, StatusError> {
    // Empty values are treated as absent filters.
    present(req.query::<String>(key))
        .map(|value| value.trim().parse::<u64>())
        .transpose()
        .or_400(&format!("Query parameter \"{key}\" must be a non-negative integer"))
}

fn filter_from_query(req: &Request) -> Result<ProductFilter, StatusError> {
    Ok(ProductFilter {
        min_stock: unsigned_query(req, "stock")?,
        min_price: unsigned_query(req, "price.min")?,
        max_price: unsigned_query(req, "price.max")?,
        category: present(req.query::<String>("category")),
    })
}

/// Product Index Handler
///
/// Lists products, optionally filtered by minimum `stock`, an inclusive
/// `price.min`/`price.max` range and an exact `category`.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = filter_from_query(req)?;

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
