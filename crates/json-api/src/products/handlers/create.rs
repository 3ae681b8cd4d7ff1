//! Create Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::amount_out_of_range},
    state::State,
};

/// Create Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub title: Option<String>,
    /// Price in pence/cents
    pub price: Option<u64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u64>,
    pub image: Option<String>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        match (
            present(request.title),
            request.price,
            present(request.category),
            present(request.description),
            request.stock,
            present(request.image),
        ) {
            (
                Some(title),
                Some(price),
                Some(category),
                Some(description),
                Some(stock),
                Some(image),
            ) => {
                let product = NewProduct {
                    title,
                    price,
                    category,
                    description,
                    stock,
                    image,
                };

                if !product.amounts_in_range() {
                    return Err(amount_out_of_range());
                }

                Ok(product)
            }
            (title, price, category, description, stock, image) => Err(missing_fields(&[
                ("title", title.is_some()),
                ("price", price.is_some()),
                ("category", category.is_some()),
                ("description", description.is_some()),
                ("stock", stock.is_some()),
                ("image", image.is_some()),
            ])),
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::try_from(json.into_inner())?;

    state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::CREATED)
}
