//! Pricing service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingServiceError {
    #[error("cart total exceeds the representable amount")]
    Overflow,

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
