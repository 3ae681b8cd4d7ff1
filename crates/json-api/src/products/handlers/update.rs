//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::amount_out_of_range},
    state::State,
};

/// Update Product Request. Absent fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub price: Option<u64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u64>,
    pub image: Option<String>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        let update = ProductUpdate {
            price: request.price,
            category: present(request.category),
            description: present(request.description),
            stock: request.stock,
            image: present(request.image),
        };

        if !update.amounts_in_range() {
            return Err(amount_out_of_range());
        }

        Ok(update)
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(title, json, depot),
    fields(title = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    title: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let title = title.into_inner();
    let update = ProductUpdate::try_from(json.into_inner())?;

    tracing::Span::current().record("title", tracing::field::display(&title));

    let product = state
        .app
        .products
        .update_product(&title, update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(title = %product.title, price = product.price, "updated product");

    Ok(StatusCode::OK)
}
