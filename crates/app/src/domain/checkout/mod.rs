//! Checkout

pub mod discounts;
pub mod errors;
pub mod service;
pub mod stage;

pub use discounts::DiscountTable;
pub use errors::CheckoutError;
pub use service::*;
pub use stage::CheckoutStage;
