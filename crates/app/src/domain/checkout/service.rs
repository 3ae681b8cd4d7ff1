//! Checkout orchestration.
//!
//! Placement runs as a short sequence of independent storage calls:
//! read cart, price, persist order, clear cart, notify. The sequence is not
//! atomic. Two concurrent checkouts for the same owner can both read the
//! same cart and both persist an order; the second clear is then a no-op.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use crate::{
    auth::Claim,
    domain::{
        carts::repository::{CartsRepository, PgCartsRepository},
        checkout::{CheckoutError, CheckoutStage, DiscountTable},
        orders::{
            models::{NewOrder, Order, OrderItem, OrderUuid},
            repository::{OrdersRepository, PgOrdersRepository},
        },
        pricing::{PgPricingService, PricingService},
    },
    notifier::{Notifier, OrderNotification},
};

#[derive(Clone)]
pub struct PgCheckoutService {
    carts: Arc<dyn CartsRepository>,
    orders: Arc<dyn OrdersRepository>,
    pricing: Arc<dyn PricingService>,
    notifier: Arc<dyn Notifier>,
    discounts: Arc<DiscountTable>,
}

impl fmt::Debug for PgCheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCheckoutService")
            .field("discounts", &self.discounts)
            .finish_non_exhaustive()
    }
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(pool: PgPool, notifier: Arc<dyn Notifier>, discounts: Arc<DiscountTable>) -> Self {
        Self {
            carts: Arc::new(PgCartsRepository::new(pool.clone())),
            orders: Arc::new(PgOrdersRepository::new(pool.clone())),
            pricing: Arc::new(PgPricingService::new(pool)),
            notifier,
            discounts,
        }
    }

    pub(crate) fn with_parts(
        carts: Arc<dyn CartsRepository>,
        orders: Arc<dyn OrdersRepository>,
        pricing: Arc<dyn PricingService>,
        notifier: Arc<dyn Notifier>,
        discounts: Arc<DiscountTable>,
    ) -> Self {
        Self {
            carts,
            orders,
            pricing,
            notifier,
            discounts,
        }
    }

    fn enter(owner: &str, stage: CheckoutStage) {
        debug!(owner, stage = %stage, "checkout stage");
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn place_order(
        &self,
        customer: &Claim,
        discount_code: Option<String>,
    ) -> Result<Order, CheckoutError> {
        let owner = customer.username.as_str();

        Self::enter(owner, CheckoutStage::Started);

        let entries = self
            .carts
            .list_entries(owner)
            .await
            .map_err(CheckoutError::storage(CheckoutStage::CartValidated))?;

        if entries.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Self::enter(owner, CheckoutStage::CartValidated);

        // A blank code means no code was supplied.
        let discount = match discount_code.filter(|code| !code.trim().is_empty()) {
            Some(code) => {
                let Some(amount) = self.discounts.amount_for(&code) else {
                    return Err(CheckoutError::UnknownDiscountCode(code));
                };

                Some((code, amount))
            }
            None => None,
        };

        let subtotal = self.pricing.total_for_entries(&entries).await?;

        // Deductions larger than the subtotal floor the total at zero.
        let total_price = discount
            .as_ref()
            .map_or(subtotal, |(_, amount)| subtotal.saturating_sub(*amount));

        Self::enter(owner, CheckoutStage::PricedAndDiscounted);

        let order = self
            .orders
            .insert_order(NewOrder {
                uuid: OrderUuid::new(),
                owner: owner.to_string(),
                items: entries
                    .into_iter()
                    .map(|entry| OrderItem {
                        product_id: entry.product_id,
                        quantity: entry.quantity,
                    })
                    .collect(),
                order_date: Timestamp::now(),
                total_price,
                discount_code: discount.map(|(code, _)| code),
            })
            .await
            .map_err(CheckoutError::storage(CheckoutStage::OrderPersisted))?;

        Self::enter(owner, CheckoutStage::OrderPersisted);

        if let Err(source) = self.carts.clear_entries(owner).await {
            error!(
                owner,
                order = %order.uuid,
                error = %source,
                "order persisted but cart could not be cleared"
            );

            return Err(CheckoutError::storage(CheckoutStage::CartCleared)(source));
        }

        Self::enter(owner, CheckoutStage::CartCleared);

        match self
            .notifier
            .dispatch(OrderNotification::order_placed(&customer.email))
        {
            Ok(()) => {
                Self::enter(owner, CheckoutStage::NotificationSent);
            }
            Err(error) => {
                warn!(owner, order = %order.uuid, error = %error, "order notification not sent");
            }
        }

        Self::enter(owner, CheckoutStage::Completed);

        info!(
            owner,
            order = %order.uuid,
            subtotal,
            total_price = order.total_price,
            discount_code = order.discount_code.as_deref(),
            "order placed"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Convert the customer's cart into an order.
    ///
    /// On success the order is persisted and the cart is empty. The
    /// confirmation notification is best effort and never fails the call.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when there is nothing to order.
    /// - [`CheckoutError::UnknownDiscountCode`] when the code is not in the
    ///   discount table. Nothing is persisted.
    /// - [`CheckoutError::Storage`] with the stage that failed. A failure at
    ///   [`CheckoutStage::CartCleared`] means the order was already stored.
    async fn place_order(
        &self,
        customer: &Claim,
        discount_code: Option<String>,
    ) -> Result<Order, CheckoutError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::Role,
        domain::{
            carts::{CartsService, models::CartEntry, repository::MockCartsRepository},
            orders::{OrdersService, models::OrderDateRange, repository::MockOrdersRepository},
            pricing::MockPricingService,
            products::models::ProductUuid,
        },
        notifier::{MockNotifier, NotifierError},
        test::TestContext,
    };

    use super::*;

    fn customer() -> Claim {
        Claim {
            username: "ana".to_string(),
            role: Role::Customer,
            email: "ana@example.com".to_string(),
        }
    }

    fn entry(product_id: &str, quantity: u64) -> CartEntry {
        CartEntry {
            owner: "ana".to_string(),
            product_id: product_id.to_string(),
            quantity,
        }
    }

    fn discounts() -> Arc<DiscountTable> {
        Arc::new(DiscountTable::from_iter([("AMOUNT100".to_string(), 100)]))
    }

    fn accepting_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();

        notifier.expect_dispatch().returning(|_| Ok(()));

        notifier
    }

    fn silent_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();

        notifier.expect_dispatch().never();

        notifier
    }

    /// A customer "ana" with a one-line cart: `quantity` of a product priced `price`.
    async fn ctx_with_cart(price: u64, quantity: i64) -> TestResult<TestContext> {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        let product = ctx.create_product("Mug", price).await?;

        ctx.carts
            .add_or_increment("ana", &product.uuid.to_string(), quantity)
            .await?;

        Ok(ctx)
    }

    fn stored_order(order: NewOrder) -> Order {
        Order {
            uuid: order.uuid,
            owner: order.owner,
            items: order.items,
            order_date: order.order_date,
            total_price: order.total_price,
            discount_code: order.discount_code,
        }
    }

    #[tokio::test]
    async fn place_order_snapshots_cart_and_clears_it() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        let mug = ctx.create_product("Mug", 10).await?;
        let lamp = ctx.create_product("Lamp", 5).await?;

        ctx.carts.add_or_increment("ana", &mug.uuid.to_string(), 2).await?;
        ctx.carts.add_or_increment("ana", &lamp.uuid.to_string(), 1).await?;

        let mut notifier = MockNotifier::new();

        notifier
            .expect_dispatch()
            .once()
            .withf(|notification| notification.to == "ana@example.com")
            .returning(|_| Ok(()));

        let order = ctx.checkout(notifier).place_order(&customer(), None).await?;

        assert_eq!(order.owner, "ana");
        assert_eq!(order.total_price, 25);
        assert_eq!(order.discount_code, None);
        assert_eq!(
            order.items,
            vec![
                OrderItem {
                    product_id: mug.uuid.to_string(),
                    quantity: 2,
                },
                OrderItem {
                    product_id: lamp.uuid.to_string(),
                    quantity: 1,
                },
            ]
        );
        assert!(ctx.carts.list_for_owner("ana").await?.is_empty());

        let stored = ctx.orders.list_orders("ana", OrderDateRange::default()).await?;

        assert_eq!(stored, vec![order]);

        Ok(())
    }

    #[tokio::test]
    async fn known_discount_reduces_total_by_its_fixed_value() -> TestResult {
        let ctx = ctx_with_cart(1_000, 2).await?;

        let order = ctx
            .checkout(accepting_notifier())
            .place_order(&customer(), Some("AMOUNT100".to_string()))
            .await?;

        assert_eq!(order.total_price, 2_000 - 100);
        assert_eq!(order.discount_code.as_deref(), Some("AMOUNT100"));

        Ok(())
    }

    #[tokio::test]
    async fn discount_larger_than_total_clamps_at_zero() -> TestResult {
        let ctx = ctx_with_cart(10, 2).await?;

        let order = ctx
            .checkout(accepting_notifier())
            .place_order(&customer(), Some("AMOUNT100".to_string()))
            .await?;

        assert_eq!(order.total_price, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_discount_code_is_rejected_before_persisting() -> TestResult {
        let ctx = ctx_with_cart(10, 1).await?;

        let result = ctx
            .checkout(silent_notifier())
            .place_order(&customer(), Some("FREESTUFF".to_string()))
            .await;

        assert!(
            matches!(result, Err(CheckoutError::UnknownDiscountCode(ref code)) if code == "FREESTUFF"),
            "expected UnknownDiscountCode, got {result:?}"
        );
        assert!(
            ctx.orders
                .list_orders("ana", OrderDateRange::default())
                .await?
                .is_empty()
        );
        assert_eq!(ctx.carts.list_for_owner("ana").await?.len(), 1, "cart untouched");

        Ok(())
    }

    #[tokio::test]
    async fn blank_discount_code_is_ignored() -> TestResult {
        let ctx = ctx_with_cart(10, 1).await?;

        let order = ctx
            .checkout(accepting_notifier())
            .place_order(&customer(), Some("  ".to_string()))
            .await?;

        assert_eq!(order.total_price, 10);
        assert_eq!(order.discount_code, None);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        let result = ctx.checkout(silent_notifier()).place_order(&customer(), None).await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
        assert!(
            ctx.orders
                .list_orders("ana", OrderDateRange::default())
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_checkout() -> TestResult {
        let ctx = ctx_with_cart(10, 1).await?;

        let mut notifier = MockNotifier::new();
        notifier
            .expect_dispatch()
            .once()
            .returning(|_| Err(NotifierError::NoRuntime));

        let order = ctx.checkout(notifier).place_order(&customer(), None).await?;

        assert_eq!(order.total_price, 10);
        assert!(ctx.carts.list_for_owner("ana").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unresolvable_products_price_as_zero() -> TestResult {
        let ctx = TestContext::new().await?;
        ctx.create_customer("ana").await?;

        ctx.carts.add_or_increment("ana", "not-a-product", 3).await?;
        ctx.carts
            .add_or_increment("ana", &ProductUuid::new().to_string(), 1)
            .await?;

        let order = ctx
            .checkout(accepting_notifier())
            .place_order(&customer(), None)
            .await?;

        assert_eq!(order.total_price, 0);
        assert_eq!(order.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn prices_the_snapshot_that_is_persisted() -> TestResult {
        let mut carts = MockCartsRepository::new();

        carts
            .expect_list_entries()
            .once()
            .returning(|_| Ok(vec![entry("p1", 4)]));
        carts.expect_clear_entries().once().returning(|_| Ok(1));

        let mut pricing = MockPricingService::new();

        pricing.expect_total_for().never();
        pricing
            .expect_total_for_entries()
            .once()
            .withf(|entries| entries.len() == 1 && entries.first().is_some_and(|e| e.quantity == 4))
            .returning(|_| Ok(40));

        let mut orders = MockOrdersRepository::new();

        orders
            .expect_insert_order()
            .once()
            .withf(|order| order.total_price == 40 && order.items.len() == 1)
            .returning(|order| Ok(stored_order(order)));

        let service = PgCheckoutService::with_parts(
            Arc::new(carts),
            Arc::new(orders),
            Arc::new(pricing),
            Arc::new(accepting_notifier()),
            discounts(),
        );

        let order = service.place_order(&customer(), None).await?;

        assert_eq!(order.total_price, 40);
        assert_eq!(order.items.first().map(|item| item.quantity), Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn failed_cart_clear_reports_stage_after_order_is_stored() {
        let mut carts = MockCartsRepository::new();

        carts
            .expect_list_entries()
            .returning(|_| Ok(vec![entry("p1", 1)]));
        carts
            .expect_clear_entries()
            .once()
            .returning(|_| Err(sqlx::Error::PoolTimedOut));

        let mut pricing = MockPricingService::new();
        pricing.expect_total_for_entries().returning(|_| Ok(10));

        let mut orders = MockOrdersRepository::new();

        orders
            .expect_insert_order()
            .once()
            .returning(|order| Ok(stored_order(order)));

        let service = PgCheckoutService::with_parts(
            Arc::new(carts),
            Arc::new(orders),
            Arc::new(pricing),
            Arc::new(silent_notifier()),
            discounts(),
        );

        let result = service.place_order(&customer(), None).await;

        assert!(
            matches!(
                result,
                Err(CheckoutError::Storage {
                    stage: CheckoutStage::CartCleared,
                    ..
                })
            ),
            "expected Storage at CartCleared, got {result:?}"
        );
    }

    #[test]
    fn debug_output_names_the_discount_table() {
        let service = PgCheckoutService::with_parts(
            Arc::new(MockCartsRepository::new()),
            Arc::new(MockOrdersRepository::new()),
            Arc::new(MockPricingService::new()),
            Arc::new(MockNotifier::new()),
            discounts(),
        );

        let debug = format!("{service:?}");

        assert!(debug.starts_with("PgCheckoutService"), "unexpected debug: {debug}");
        assert!(debug.contains("AMOUNT100"), "unexpected debug: {debug}");
    }
}
