//! Rate Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Rate Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct RateProductRequest {
    /// Integer from 1 to 5
    pub rating: Option<i64>,
}

/// Rate Product Handler
#[endpoint(
    tags("products"),
    summary = "Rate Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rating recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    title: PathParam<String>,
    json: JsonBody<RateProductRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(rating) = json.into_inner().rating else {
        return Err(missing_fields(&[("rating", false)]));
    };

    state
        .app
        .products
        .rate_product(&title.into_inner(), rating)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
