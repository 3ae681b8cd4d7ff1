//! Order Models

use jiff::{Span, Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::{domain::orders::errors::OrdersServiceError, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Placed order. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub owner: String,
    pub items: Vec<OrderItem>,
    pub order_date: Timestamp,
    /// Post-discount total in minor units, fixed at placement.
    pub total_price: u64,
    pub discount_code: Option<String>,
}

/// Snapshot of one cart line at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u64,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub owner: String,
    pub items: Vec<OrderItem>,
    pub order_date: Timestamp,
    pub total_price: u64,
    pub discount_code: Option<String>,
}

/// Inclusive `order_date` bounds. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderDateRange {
    pub from: Option<Timestamp>,
    pub until: Option<Timestamp>,
}

impl OrderDateRange {
    /// Parse optional textual bounds.
    ///
    /// Each bound is either an RFC 3339 timestamp or a `YYYY-MM-DD` date in
    /// UTC. A date-only upper bound covers that whole day.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::InvalidDate`] if either bound is
    /// malformed.
    pub fn parse(from: Option<&str>, until: Option<&str>) -> Result<Self, OrdersServiceError> {
        Ok(Self {
            from: from.map(parse_lower_bound).transpose()?,
            until: until.map(parse_upper_bound).transpose()?,
        })
    }

    #[must_use]
    pub fn contains(&self, at: Timestamp) -> bool {
        self.from.is_none_or(|from| at >= from) && self.until.is_none_or(|until| at <= until)
    }
}

fn invalid(value: &str) -> OrdersServiceError {
    OrdersServiceError::InvalidDate(value.to_string())
}

fn parse_lower_bound(value: &str) -> Result<Timestamp, OrdersServiceError> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    start_of_day(value.parse::<Date>().map_err(|_unparsed| invalid(value))?, value)
}

fn parse_upper_bound(value: &str) -> Result<Timestamp, OrdersServiceError> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let date = value.parse::<Date>().map_err(|_unparsed| invalid(value))?;
    let next_day = date.tomorrow().map_err(|_unparsed| invalid(value))?;

    start_of_day(next_day, value)?
        .checked_sub(Span::new().nanoseconds(1))
        .map_err(|_unparsed| invalid(value))
}

fn start_of_day(date: Date, value: &str) -> Result<Timestamp, OrdersServiceError> {
    date.to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|_unparsed| invalid(value))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn date_only_lower_bound_excludes_previous_day() -> TestResult {
        let range = OrderDateRange::parse(Some("2024-01-01"), None)?;

        let new_years_eve: Timestamp = "2023-12-31T12:00:00Z".parse()?;
        let summer: Timestamp = "2024-06-01T09:30:00Z".parse()?;

        assert!(!range.contains(new_years_eve));
        assert!(range.contains(summer));

        Ok(())
    }

    #[test]
    fn date_only_upper_bound_includes_whole_day() -> TestResult {
        let range = OrderDateRange::parse(None, Some("2024-06-01"))?;

        let late: Timestamp = "2024-06-01T23:59:59.999Z".parse()?;
        let next: Timestamp = "2024-06-02T00:00:00Z".parse()?;

        assert!(range.contains(late));
        assert!(!range.contains(next));

        Ok(())
    }

    #[test]
    fn timestamp_bounds_are_used_verbatim() -> TestResult {
        let range = OrderDateRange::parse(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T11:00:00Z"))?;

        assert!(range.contains("2024-01-01T10:00:00Z".parse()?));
        assert!(range.contains("2024-01-01T11:00:00Z".parse()?));
        assert!(!range.contains("2024-01-01T11:00:01Z".parse()?));

        Ok(())
    }

    #[test]
    fn missing_bounds_are_unbounded() {
        assert!(OrderDateRange::default().contains(Timestamp::UNIX_EPOCH));
    }

    #[test]
    fn malformed_bound_is_rejected() {
        let result = OrderDateRange::parse(Some("last tuesday"), None);

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidDate(ref value)) if value == "last tuesday"),
            "expected InvalidDate, got {result:?}"
        );
    }
}
