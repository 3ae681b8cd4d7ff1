//! Product Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Largest price or stock value that storage accepts.
pub const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub title: String,
    pub price: u64,
    pub category: String,
    pub description: String,
    pub stock: u64,
    pub image: String,
    pub rating: Rating,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Accumulated customer ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rating {
    pub count: u64,
    pub sum: u64,
}

impl Rating {
    /// Mean rating, or `0.0` when nobody has rated yet.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "rating totals stay far below 2^52")]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        self.sum as f64 / self.count as f64
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub price: u64,
    pub category: String,
    pub description: String,
    pub stock: u64,
    pub image: String,
}

impl NewProduct {
    /// Whether price and stock fit a `BIGINT` column.
    #[must_use]
    pub fn amounts_in_range(&self) -> bool {
        self.price <= MAX_AMOUNT && self.stock <= MAX_AMOUNT
    }
}

/// Partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub price: Option<u64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u64>,
    pub image: Option<String>,
}

impl ProductUpdate {
    /// Whether the supplied price and stock fit a `BIGINT` column.
    #[must_use]
    pub fn amounts_in_range(&self) -> bool {
        self.price.is_none_or(|price| price <= MAX_AMOUNT)
            && self.stock.is_none_or(|stock| stock <= MAX_AMOUNT)
    }
}

/// Catalog listing filter. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub min_stock: Option<u64>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_unrated_product_is_zero() {
        assert!(Rating::default().average().abs() < f64::EPSILON);
    }

    #[test]
    fn amounts_past_bigint_are_out_of_range() {
        let update = ProductUpdate {
            stock: Some(MAX_AMOUNT + 1),
            ..ProductUpdate::default()
        };

        assert!(!update.amounts_in_range());
        assert!(ProductUpdate::default().amounts_in_range());
        assert!(
            ProductUpdate {
                price: Some(MAX_AMOUNT),
                ..ProductUpdate::default()
            }
            .amounts_in_range()
        );
    }

    #[test]
    fn average_divides_sum_by_count() {
        let rating = Rating { count: 4, sum: 14 };

        assert!((rating.average() - 3.5).abs() < f64::EPSILON);
    }
}
