//! Checkout Config

use clap::Args;
use storefront_app::domain::checkout::DiscountTable;

/// Checkout settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Discount codes as `CODE=amount` pairs, amounts in minor currency units
    #[arg(
        long,
        env = "DISCOUNT_CODES",
        default_value = "AMOUNT100=10000,AMOUNT200=20000"
    )]
    pub discount_codes: DiscountTable,
}
