//! Checkout errors.

use thiserror::Error;

use crate::domain::{checkout::CheckoutStage, pricing::PricingServiceError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("unknown discount code: {0}")]
    UnknownDiscountCode(String),

    #[error("pricing failed")]
    Pricing(#[from] PricingServiceError),

    /// Storage failed while moving to `stage`.
    #[error("storage error while reaching {stage}")]
    Storage {
        stage: CheckoutStage,
        #[source]
        source: sqlx::Error,
    },
}

impl CheckoutError {
    pub(crate) fn storage(stage: CheckoutStage) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { stage, source }
    }
}
