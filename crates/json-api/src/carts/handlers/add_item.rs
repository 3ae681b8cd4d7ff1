//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add Cart Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Add Cart Item Handler
///
/// Adds to the quantity already in the cart when the product is present.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.claim_or_401()?.username.as_str();
    let request = json.into_inner();

    let (product_id, quantity) = match (present(request.product_id), request.quantity) {
        (Some(product_id), Some(quantity)) => (product_id, quantity),
        (product_id, quantity) => {
            return Err(missing_fields(&[
                ("productId", product_id.is_some()),
                ("quantity", quantity.is_some()),
            ]));
        }
    };

    if quantity <= 0 {
        return Err(StatusError::bad_request().brief("Quantity must be greater than 0"));
    }

    state
        .app
        .carts
        .add_or_increment(owner, &product_id, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, models::CartEntry};

    use crate::test_helpers::{Mocks, TEST_CUSTOMER, customer_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        customer_service(mocks, Router::with_path("carts/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_add_or_increment()
            .once()
            .withf(|owner, product_id, quantity| {
                owner == TEST_CUSTOMER && product_id == "p-1" && *quantity == 3
            })
            .return_once(|owner, product_id, quantity| {
                Ok(CartEntry {
                    owner: owner.to_string(),
                    product_id: product_id.to_string(),
                    quantity: quantity.unsigned_abs(),
                })
            });

        let res = TestClient::post("http://example.com/carts/items")
            .json(&json!({ "productId": "p-1", "quantity": 3 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_zero_quantity_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/carts/items")
            .json(&json!({ "productId": "p-1", "quantity": 0 }))
            .send(&make_service(Mocks::default()))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.contains("Quantity must be greater than 0"),
            "unexpected body: {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_missing_quantity_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/carts/items")
            .json(&json!({ "productId": "p-1" }))
            .send(&make_service(Mocks::default()))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("Missing fields: quantity"), "unexpected body: {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_storage_error_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_add_or_increment()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/carts/items")
            .json(&json!({ "productId": "p-1", "quantity": 1 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
