//! Orders service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::orders::{
    errors::OrdersServiceError,
    models::{Order, OrderDateRange},
    repository::{OrdersRepository, PgOrdersRepository},
};

#[derive(Clone)]
pub struct PgOrdersService {
    repository: Arc<dyn OrdersRepository>,
}

impl fmt::Debug for PgOrdersService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgOrdersService")
            .finish_non_exhaustive()
    }
}

impl PgOrdersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgOrdersRepository::new(pool)))
    }

    pub(crate) fn with_repository(repository: Arc<dyn OrdersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(
        &self,
        owner: &str,
        range: OrderDateRange,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.repository.list_orders(owner, range).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// The owner's orders placed within `range`, oldest first.
    async fn list_orders(
        &self,
        owner: &str,
        range: OrderDateRange,
    ) -> Result<Vec<Order>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::orders::models::{NewOrder, OrderItem, OrderUuid},
        test::TestContext,
    };

    use super::*;

    async fn seed(ctx: &TestContext, owner: &str, order_date: &str) -> TestResult<Order> {
        let repository = PgOrdersRepository::new(ctx.db.pool().clone());

        Ok(repository
            .insert_order(NewOrder {
                uuid: OrderUuid::new(),
                owner: owner.to_string(),
                items: vec![OrderItem {
                    product_id: "p1".to_string(),
                    quantity: 1,
                }],
                order_date: order_date.parse::<Timestamp>()?,
                total_price: 10,
                discount_code: None,
            })
            .await?)
    }

    fn uuids(orders: &[Order]) -> Vec<OrderUuid> {
        orders.iter().map(|order| order.uuid).collect()
    }

    #[tokio::test]
    async fn list_orders_filters_by_owner_and_lower_bound() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;
        ctx.create_customer("bo").await?;

        seed(&ctx, "ana", "2023-12-31T18:00:00Z").await?;
        let after = seed(&ctx, "ana", "2024-06-01T08:00:00Z").await?;
        seed(&ctx, "bo", "2024-06-01T08:00:00Z").await?;

        let listed = ctx
            .orders
            .list_orders("ana", OrderDateRange::parse(Some("2024-01-01"), None)?)
            .await?;

        assert_eq!(uuids(&listed), vec![after.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_bounds_are_inclusive() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        let first = seed(&ctx, "ana", "2024-01-01T00:00:00Z").await?;
        let last = seed(&ctx, "ana", "2024-06-01T23:59:59Z").await?;
        seed(&ctx, "ana", "2024-06-02T00:00:01Z").await?;

        let listed = ctx
            .orders
            .list_orders(
                "ana",
                OrderDateRange::parse(Some("2024-01-01"), Some("2024-06-01"))?,
            )
            .await?;

        assert_eq!(uuids(&listed), vec![first.uuid, last.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_without_bounds_returns_everything_for_owner() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        let old = seed(&ctx, "ana", "2023-12-31T18:00:00Z").await?;
        let new = seed(&ctx, "ana", "2024-06-01T08:00:00Z").await?;

        let listed = ctx.orders.list_orders("ana", OrderDateRange::default()).await?;

        assert_eq!(uuids(&listed), vec![old.uuid, new.uuid], "oldest first");
        assert_eq!(listed.first().map(|order| order.items.len()), Some(1));
        assert!(
            ctx.orders
                .list_orders("cy", OrderDateRange::default())
                .await?
                .is_empty()
        );

        Ok(())
    }
}
