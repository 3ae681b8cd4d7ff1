//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod rate;
pub(crate) mod update;

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::models::{MAX_AMOUNT, Product, Rating};

/// 400 for a price or stock the catalog cannot store.
pub(crate) fn amount_out_of_range() -> StatusError {
    StatusError::bad_request().brief(format!("Price and stock must not exceed {MAX_AMOUNT}"))
}

/// Product as exposed over HTTP
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,

    /// Unique catalog title
    pub title: String,

    /// The price of the product in pence/cents
    pub price: u64,

    pub category: String,
    pub description: String,
    pub stock: u64,
    pub image: String,
    pub rating: RatingResponse,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

/// Accumulated customer ratings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingResponse {
    pub count: u64,
    pub sum: u64,
    pub average: f64,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        RatingResponse {
            count: rating.count,
            sum: rating.sum,
            average: rating.average(),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            title: product.title,
            price: product.price,
            category: product.category,
            description: product.description,
            stock: product.stock,
            image: product.image,
            rating: product.rating.into(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
