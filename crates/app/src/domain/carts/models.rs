//! Cart Models

/// One product line in an owner's in-progress cart.
///
/// `product_id` is an opaque catalog key. It is not checked against the
/// catalog when the entry is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub owner: String,
    pub product_id: String,
    pub quantity: u64,
}
