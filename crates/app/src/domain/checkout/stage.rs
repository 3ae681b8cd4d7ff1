//! Checkout stages.

use std::fmt;

/// Progress of a single checkout attempt.
///
/// The order is persisted and the cart cleared by separate statements. A
/// failure between [`CheckoutStage::OrderPersisted`] and
/// [`CheckoutStage::CartCleared`] leaves a stored order and a full cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStage {
    Started,
    CartValidated,
    PricedAndDiscounted,
    OrderPersisted,
    CartCleared,
    NotificationSent,
    Completed,
}

impl CheckoutStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::CartValidated => "cart_validated",
            Self::PricedAndDiscounted => "priced_and_discounted",
            Self::OrderPersisted => "order_persisted",
            Self::CartCleared => "cart_cleared",
            Self::NotificationSent => "notification_sent",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
